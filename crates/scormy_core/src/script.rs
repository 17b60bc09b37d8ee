use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Action, ChatOption, MenuId, ScriptError};

pub const RESUME_URL: &str =
    "https://docs.google.com/document/d/1e54OtfsPnxVxRFm-MQsg1aT2geM-t3nhnAoj0cfJGRY/view";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/kimlamothe/";
pub const ACKNOWLEDGEMENT: &str = "Thanks for your message! Kim will get back to you soon.";
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 500;

/// The whole decision tree: opening lines, menu nodes and canned reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub opening: Vec<String>,
    pub entry: MenuId,
    pub menus: BTreeMap<MenuId, Vec<ChatOption>>,
    pub acknowledgement: String,
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,
}

fn default_scroll_delay_ms() -> u64 {
    DEFAULT_SCROLL_DELAY_MS
}

impl Default for Script {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl Script {
    /// Built-in script of the portfolio widget.
    pub fn portfolio() -> Self {
        let mut menus = BTreeMap::new();

        menus.insert(
            MenuId::root(),
            vec![
                ChatOption::new(
                    "I’m a recruiter",
                    vec![Action::say(
                        "Great! Here are a few quick links for you:",
                        MenuId::RECRUITER,
                    )],
                ),
                ChatOption::new(
                    "I’m a potential client",
                    vec![Action::say(
                        "Welcome! Here’s how Kim can support your team:",
                        MenuId::CLIENT,
                    )],
                ),
                ChatOption::new(
                    "I’m just browsing",
                    vec![Action::say(
                        "Totally fine! Feel free to explore the Projects section, and click any button if you want help later.",
                        MenuId::BROWSING,
                    )],
                ),
            ],
        );

        menus.insert(
            MenuId::new(MenuId::RECRUITER),
            vec![
                ChatOption::new("View Resume", vec![Action::open(RESUME_URL)]),
                ChatOption::new(
                    "See Key Projects",
                    vec![Action::say(
                        "Check out: Neurodiversity in the Workplace, Accessibility in eLearning, and SCORM for Healthcare.",
                        MenuId::RECRUITER,
                    )],
                ),
                ChatOption::new(
                    "What tools does Kim use?",
                    vec![Action::say(
                        "Kim regularly uses Articulate Storyline, Rise 360, Vyond, Camtasia, and Canva.",
                        MenuId::RECRUITER,
                    )],
                ),
            ],
        );

        menus.insert(
            MenuId::new(MenuId::CLIENT),
            vec![
                ChatOption::new(
                    "View Work Samples",
                    vec![Action::say(
                        "Take a look at the Projects section for full samples.",
                        MenuId::CLIENT,
                    )],
                ),
                ChatOption::new(
                    "Learn About Her Process",
                    vec![
                        Action::say("Let me walk you through Kim’s process.", MenuId::CLIENT),
                        Action::scroll_to("process"),
                    ],
                ),
                ChatOption::new(
                    "Does she do accessibility?",
                    vec![Action::say(
                        "Absolutely. All designs are 508-compliant and tested with JAWS and Adobe accessibility tools.",
                        MenuId::CLIENT,
                    )],
                ),
            ],
        );

        menus.insert(MenuId::new(MenuId::BROWSING), Vec::new());

        Self {
            opening: vec![
                "👋 Hey, I’m SCORMy — zipped, packaged, and here to guide you through Kim’s portfolio. No LMS required.".to_string(),
                "Why did the microlearning module get promoted? It always made a big impact in just two minutes.".to_string(),
                "Who are you here as today?".to_string(),
            ],
            entry: MenuId::root(),
            menus,
            acknowledgement: ACKNOWLEDGEMENT.to_string(),
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
        }
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    /// Options installed when `menu` becomes live. Unknown menus have none.
    pub fn options_for(&self, menu: &MenuId) -> Vec<ChatOption> {
        self.menus.get(menu).cloned().unwrap_or_default()
    }

    /// Checks that every option is well-formed and every branch leads somewhere.
    pub fn validate(&self) -> Result<(), ScriptError> {
        if !self.menus.contains_key(&self.entry) {
            return Err(ScriptError::MissingEntryMenu(self.entry.clone()));
        }

        for (menu, options) in &self.menus {
            for (index, option) in options.iter().enumerate() {
                if option.label.trim().is_empty() {
                    return Err(ScriptError::EmptyLabel {
                        menu: menu.clone(),
                        index,
                    });
                }
                if option.effects.is_empty() {
                    return Err(ScriptError::NoActions {
                        menu: menu.clone(),
                        label: option.label.clone(),
                    });
                }
                for action in &option.effects {
                    self.validate_action(menu, &option.label, action)?;
                }
            }
        }
        Ok(())
    }

    fn validate_action(
        &self,
        menu: &MenuId,
        label: &str,
        action: &Action,
    ) -> Result<(), ScriptError> {
        match action {
            Action::AppendBotMessage { next, .. } if !self.menus.contains_key(next) => {
                Err(ScriptError::UnknownMenu {
                    menu: menu.clone(),
                    label: label.to_string(),
                    target: next.clone(),
                })
            }
            Action::NavigateExternal { url } => {
                check_external_url(url).map_err(|reason| ScriptError::InvalidUrl {
                    menu: menu.clone(),
                    label: label.to_string(),
                    url: url.clone(),
                    reason,
                })
            }
            Action::ScrollToSection { section } if section.trim().is_empty() => {
                Err(ScriptError::EmptySection {
                    menu: menu.clone(),
                    label: label.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

fn check_external_url(raw: &str) -> Result<(), String> {
    let parsed = Url::parse(raw).map_err(|err| err.to_string())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme `{other}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_script_is_valid() {
        assert_eq!(Script::portfolio().validate(), Ok(()));
    }

    #[test]
    fn portfolio_tree_has_depth_two() {
        let script = Script::portfolio();
        for option in script.options_for(&MenuId::root()) {
            for action in &option.effects {
                if let Action::AppendBotMessage { next, .. } = action {
                    for sub in script.options_for(next) {
                        for sub_action in &sub.effects {
                            if let Action::AppendBotMessage { next: leaf, .. } = sub_action {
                                assert_eq!(leaf, next, "second level must not open a third");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn unknown_menu_reports_option() {
        let mut script = Script::portfolio();
        script
            .menus
            .get_mut(&MenuId::root())
            .unwrap()
            .push(ChatOption::new("Lost", vec![Action::say("hm", "nowhere")]));

        assert_eq!(
            script.validate(),
            Err(ScriptError::UnknownMenu {
                menu: MenuId::root(),
                label: "Lost".to_string(),
                target: MenuId::new("nowhere"),
            })
        );
    }

    #[test]
    fn non_http_urls_are_rejected() {
        let mut script = Script::portfolio();
        script.menus.insert(
            MenuId::new("links"),
            vec![ChatOption::new("Mail", vec![Action::open("mailto:kim@example.com")])],
        );

        match script.validate() {
            Err(ScriptError::InvalidUrl { label, reason, .. }) => {
                assert_eq!(label, "Mail");
                assert!(reason.contains("mailto"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn relative_url_is_rejected() {
        assert!(check_external_url("/resume.pdf").is_err());
        assert!(check_external_url(RESUME_URL).is_ok());
        assert!(check_external_url(LINKEDIN_URL).is_ok());
    }

    #[test]
    fn blank_label_and_missing_entry_are_rejected() {
        let mut script = Script::portfolio();
        script
            .menus
            .insert(MenuId::new("blank"), vec![ChatOption::new("  ", vec![])]);
        assert_eq!(
            script.validate(),
            Err(ScriptError::EmptyLabel {
                menu: MenuId::new("blank"),
                index: 0,
            })
        );

        let mut script = Script::portfolio();
        script.entry = MenuId::new("start");
        assert_eq!(
            script.validate(),
            Err(ScriptError::MissingEntryMenu(MenuId::new("start")))
        );
    }

    #[test]
    fn option_without_actions_is_rejected() {
        let mut script = Script::portfolio();
        script
            .menus
            .insert(MenuId::new("idle"), vec![ChatOption::new("Nothing", vec![])]);
        assert!(matches!(
            script.validate(),
            Err(ScriptError::NoActions { .. })
        ));
    }

    #[test]
    fn blank_section_is_rejected() {
        let mut script = Script::portfolio();
        script
            .menus
            .insert(MenuId::new("nav"), vec![ChatOption::new("Go", vec![Action::scroll_to(" ")])]);
        assert!(matches!(
            script.validate(),
            Err(ScriptError::EmptySection { .. })
        ));
    }
}
