//! The portfolio page around the chat widget: navigation, sections, contact links.

use eframe::egui::{self, RichText, ScrollArea};
use scormy_core::{Effect, LINKEDIN_URL, RESUME_URL};
use scormy_logging::chat_warn;

use super::constants::*;

const NAV: [(&str, &str); 4] = [
    ("About", SECTION_ABOUT),
    ("Process", SECTION_PROCESS),
    ("Projects", SECTION_PROJECTS),
    ("Contact", SECTION_CONTACT),
];

const PROCESS_STEPS: [(&str, &str); 5] = [
    (
        "Discover",
        "I start by getting to know the learners, the goals, and the gaps. This means reviewing existing materials, meeting with stakeholders and SMEs, and asking all the right questions.",
    ),
    (
        "Design",
        "Next, I create a blueprint for success. I map out learning objectives, structure the content, and select the best format, whether that’s eLearning, ILT, microlearning, or a combination of approaches.",
    ),
    (
        "Develop",
        "I storyboard, build interactions, write scripts, and develop media, keeping everything aligned with accessibility standards and instructional best practices.",
    ),
    (
        "Test",
        "I gather feedback early and often, run pilot sessions, and adjust based on what works and what doesn’t.",
    ),
    (
        "Deliver and Reflect",
        "I support the launch and evaluate results, so that every project gets better than the last.",
    ),
];

const KEY_PROJECTS: [&str; 3] = [
    "Neurodiversity in the Workplace",
    "Accessibility in eLearning",
    "SCORM for Healthcare",
];

#[derive(Debug, Default)]
pub struct PageState {
    dark_mode: bool,
    open_step: Option<usize>,
    scroll_target: Option<String>,
}

impl PageState {
    /// Scrolls `section` into view on the next rendered frame.
    pub fn request_scroll(&mut self, section: String) {
        self.scroll_target = Some(section);
    }

    fn take_scroll(&mut self, section: &str) -> bool {
        if self.scroll_target.as_deref() == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }

    fn toggle_step(&mut self, index: usize) {
        self.open_step = if self.open_step == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

/// Draws the page. Link clicks come back as effects for the effect runner.
pub fn show_page(ctx: &egui::Context, page: &mut PageState) -> Vec<Effect> {
    let mut effects = Vec::new();

    egui::TopBottomPanel::top("nav").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for (label, section) in NAV {
                if ui.link(label).clicked() {
                    page.request_scroll(section.to_string());
                }
            }
            ui.separator();
            let toggle = if page.dark_mode { "Light" } else { "Dark" };
            if ui.button(toggle).clicked() {
                page.dark_mode = !page.dark_mode;
                ctx.set_visuals(if page.dark_mode {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                });
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .id_salt("page")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                hero(ui);
                about(ui, page);
                process(ui, page);
                projects(ui, page);
                contact(ui, page, &mut effects);
            });
    });

    if let Some(section) = page.scroll_target.take() {
        chat_warn!("section `{}` not found on page", section);
    }

    effects
}

fn section_heading(ui: &mut egui::Ui, page: &mut PageState, section: &str, title: &str) {
    ui.add_space(32.0);
    let response = ui.heading(title);
    if page.take_scroll(section) {
        response.scroll_to_me(Some(egui::Align::TOP));
    }
    ui.add_space(8.0);
}

fn hero(ui: &mut egui::Ui) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Strategic & Results-Focused Design That Learners Might Even Enjoy")
                .size(28.0)
                .strong(),
        );
        ui.label(
            "I design clear, creative, and inclusive learning experiences that make complex systems feel simple.",
        );
    });
}

fn about(ui: &mut egui::Ui, page: &mut PageState) {
    section_heading(ui, page, SECTION_ABOUT, "About Me");
    ui.label(
        "Hi, I’m Kim Lamothe, a curious, matcha-over-coffee kind of Instructional Designer who believes learning should be clear, inclusive, and just a little bit fun.",
    );
    ui.label(
        "I use tools like Articulate, Storyline, and Vyond. But what really powers my work? A steady blend of creativity, clarity, and optimism.",
    );
}

fn process(ui: &mut egui::Ui, page: &mut PageState) {
    section_heading(ui, page, SECTION_PROCESS, "My Instructional Design Process");
    for (index, (title, content)) in PROCESS_STEPS.iter().enumerate() {
        let open = page.open_step == Some(index);
        if ui.selectable_label(open, *title).clicked() {
            page.toggle_step(index);
        }
        if open {
            ui.indent(("process_step", index), |ui| {
                ui.label(*content);
            });
        }
    }
}

fn projects(ui: &mut egui::Ui, page: &mut PageState) {
    section_heading(ui, page, SECTION_PROJECTS, "Projects");
    for title in KEY_PROJECTS {
        ui.label(RichText::new(title).strong());
    }
}

fn contact(ui: &mut egui::Ui, page: &mut PageState, effects: &mut Vec<Effect>) {
    section_heading(ui, page, SECTION_CONTACT, "Contact");
    ui.label("Want to collaborate or chat about matcha, tech, or training? Reach out!");
    ui.horizontal(|ui| {
        for (label, url) in [
            ("Email Me", CONTACT_EMAIL),
            ("View Resume", RESUME_URL),
            ("Connect on LinkedIn", LINKEDIN_URL),
        ] {
            if ui.button(label).clicked() {
                effects.push(Effect::OpenExternal {
                    url: url.to_string(),
                });
            }
        }
    });
    ui.add_space(160.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_keeps_one_step_open() {
        let mut page = PageState::default();
        page.toggle_step(1);
        page.toggle_step(3);
        assert_eq!(page.open_step, Some(3));
        page.toggle_step(3);
        assert_eq!(page.open_step, None);
    }

    #[test]
    fn scroll_target_is_consumed_once() {
        let mut page = PageState::default();
        page.request_scroll(SECTION_PROCESS.to_string());

        assert!(!page.take_scroll(SECTION_ABOUT));
        assert!(page.take_scroll(SECTION_PROCESS));
        assert!(!page.take_scroll(SECTION_PROCESS));
    }
}
