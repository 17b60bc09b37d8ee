use std::sync::Arc;
use std::time::Instant;

use eframe::egui;
use scormy_core::{update, ChatState, Msg, Script};
use scormy_logging::{chat_debug, chat_info};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::script_file;
use super::ui;
use super::ui::layout::PageState;
use super::ui::typewriter::Typewriter;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let script = script_file::load_script(&script_file::script_path());
    let app = PortfolioApp::new(script);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kim Lamothe | Portfolio")
            .with_inner_size(ui::constants::WINDOW_SIZE)
            .with_min_inner_size(ui::constants::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    chat_info!("Starting portfolio shell");
    eframe::run_native(
        "SCORMy",
        native_options,
        Box::new(move |creation_context| {
            creation_context.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("UI event loop failed: {err}"))
}

struct PortfolioApp {
    state: ChatState,
    effects: EffectRunner,
    page: PageState,
    typewriter: Typewriter,
    frame: u64,
}

impl PortfolioApp {
    fn new(script: Arc<Script>) -> Self {
        Self {
            state: ChatState::with_script(script),
            effects: EffectRunner::new(),
            page: PageState::default(),
            typewriter: Typewriter::new(ui::constants::TYPE_SPEED),
            frame: 0,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg, ctx: &egui::Context, now: Instant) {
        chat_debug!("dispatch {:?}", msg);
        let placeholder = ChatState::with_script(self.state.script_arc());
        let state = std::mem::replace(&mut self.state, placeholder);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects, ctx, now);
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame += 1;
        scormy_logging::set_frame(self.frame);
        let now = Instant::now();

        if let Some(section) = self.effects.due_scroll(now) {
            self.page.request_scroll(section);
        }

        let link_effects = ui::layout::show_page(ctx, &mut self.page);
        self.effects.run(link_effects, ctx, now);

        let view = self.state.view();
        let msgs = ui::render::show_chat(ctx, &view, &mut self.typewriter, now);
        for msg in msgs {
            self.dispatch_msg(msg, ctx, now);
        }

        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
    }
}
