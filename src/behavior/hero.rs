use super::Command;

/// Hide the hero text straight away and schedule its fade-in.
pub fn on_content_loaded(hero_present: bool, fade_delay_ms: u32) -> Vec<Command> {
    if !hero_present {
        return Vec::new();
    }
    vec![Command::HideHero, Command::ScheduleHeroFade { delay_ms: fade_delay_ms }]
}

pub fn on_fade_due(transition: &str) -> Vec<Command> {
    vec![Command::FadeInHero { transition: transition.to_string() }]
}
