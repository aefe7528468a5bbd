//! Page behaviour as a dispatch table.
//!
//! Every browser event is turned into a [`PageEvent`] carrying whatever the
//! handler needs to know about the document, and [`dispatch`] answers with the
//! next [`PageState`] plus a list of [`Command`]s for the DOM layer to carry out.
//! Nothing in here touches the browser.

pub mod anchor;
pub mod contact;
pub mod header;
pub mod hero;
pub mod reveal;

use log::{debug, error, warn};

use crate::config::SiteConfig;
use contact::{ContactSubmission, FormPhase, StatusMessage};
use header::HeaderStyle;
use reveal::RevealSnapshot;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    /// Written on every scroll; nothing reads it yet.
    pub last_scroll: f64,
    pub form: FormPhase,
    /// Bumped each time a status message is shown so older hide timers can be told apart.
    pub status_generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scrolled { scroll_y: f64, reveals: RevealSnapshot },
    WindowLoaded { reveals: RevealSnapshot },
    ContentLoaded { hero_present: bool, reveals: RevealSnapshot },
    AnchorClicked { href: String, target_top: Option<f64>, page_y_offset: f64 },
    FormSubmitted { submission: ContactSubmission, submit_label: String },
    /// Outcome of navigating to the mailto URI; `Err` carries the browser's complaint.
    MailHandoffFinished(Result<(), String>),
    StatusHideElapsed { generation: u64 },
    HeroFadeDue,
    PortfolioItemClicked { index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ActivateReveal(usize),
    StyleHeader(HeaderStyle),
    ScrollTo { top: f64, smooth: bool },
    ShowStatus(StatusMessage),
    ScheduleStatusHide { generation: u64, delay_ms: u32 },
    HideStatus,
    SetSubmitBusy { label: String },
    RestoreSubmit { label: String },
    OpenMailClient { uri: String },
    ResetForm,
    HideHero,
    ScheduleHeroFade { delay_ms: u32 },
    FadeInHero { transition: String },
    LogDiagnostic(String),
}

pub fn dispatch(config: &SiteConfig, mut state: PageState, event: PageEvent) -> (PageState, Vec<Command>) {
    let mut commands = Vec::new();

    match event {
        PageEvent::Scrolled { scroll_y, reveals } => {
            commands.extend(reveal_commands(config, &reveals));
            commands.push(Command::StyleHeader(HeaderStyle::for_offset(
                scroll_y,
                config.header_scroll_threshold,
            )));
            state.last_scroll = scroll_y;
        }
        PageEvent::WindowLoaded { reveals } => {
            commands.extend(reveal_commands(config, &reveals));
        }
        PageEvent::ContentLoaded { hero_present, reveals } => {
            commands.extend(hero::on_content_loaded(hero_present, config.hero_fade_delay_ms));
            commands.extend(reveal_commands(config, &reveals));
        }
        PageEvent::AnchorClicked { href, target_top, page_y_offset } => match target_top {
            Some(top) => commands.push(Command::ScrollTo {
                top: anchor::scroll_destination(top, page_y_offset, config.header_offset),
                smooth: true,
            }),
            None => debug!("No scroll target for {:?}", href),
        },
        PageEvent::FormSubmitted { submission, submit_label } => {
            if let FormPhase::Sending { .. } = state.form {
                debug!("Ignoring contact form submit while a handoff is in progress");
                return (state, commands);
            }
            match submission.validate() {
                Err(err) => {
                    debug!("Contact form rejected: {}", err);
                    show_status(config, &mut state, StatusMessage::rejected(&err), &mut commands);
                }
                Ok(()) => {
                    commands.push(Command::SetSubmitBusy { label: config.busy_label.clone() });
                    commands.push(Command::OpenMailClient {
                        uri: submission.mailto_uri(&config.recipient),
                    });
                    state.form = FormPhase::Sending { original_label: submit_label };
                }
            }
        }
        PageEvent::MailHandoffFinished(outcome) => {
            let original_label = match std::mem::take(&mut state.form) {
                FormPhase::Sending { original_label } => original_label,
                FormPhase::Idle => {
                    warn!("Mail handoff finished with no submission in flight");
                    return (state, commands);
                }
            };
            match outcome {
                Ok(()) => {
                    show_status(config, &mut state, StatusMessage::success(contact::SUCCESS_MESSAGE), &mut commands);
                    commands.push(Command::ResetForm);
                }
                Err(reason) => {
                    error!("Error: {}", reason);
                    show_status(config, &mut state, StatusMessage::handoff_failed(&config.recipient), &mut commands);
                }
            }
            commands.push(Command::RestoreSubmit { label: original_label });
        }
        PageEvent::StatusHideElapsed { generation } => {
            if generation == state.status_generation {
                commands.push(Command::HideStatus);
            } else {
                debug!("Stale status timer {} (current {})", generation, state.status_generation);
            }
        }
        PageEvent::HeroFadeDue => {
            commands.extend(hero::on_fade_due(&config.hero_transition));
        }
        PageEvent::PortfolioItemClicked { index } => {
            debug!("Portfolio item {} activated", index);
            commands.push(Command::LogDiagnostic("Portfolio item clicked".to_string()));
        }
    }

    (state, commands)
}

fn reveal_commands(config: &SiteConfig, reveals: &RevealSnapshot) -> Vec<Command> {
    reveal::newly_revealed(reveals, config.reveal_threshold)
        .into_iter()
        .map(Command::ActivateReveal)
        .collect()
}

fn show_status(config: &SiteConfig, state: &mut PageState, message: StatusMessage, commands: &mut Vec<Command>) {
    state.status_generation += 1;
    commands.push(Command::ShowStatus(message));
    commands.push(Command::ScheduleStatusHide {
        generation: state.status_generation,
        delay_ms: config.status_hide_ms,
    });
}
