/// Speech-bubble captions as an ordered rule table.
///
/// Rules are checked top to bottom and the first match wins, so the most
/// specific band sits highest. Altitude bounds are `min <= alt < below`.

/// What the rider says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caption {
    SafeLanding,
    Greeting,
    Destination,
    CloseCall,
    Jumping,
    Ignition,
    ComposePower,
    BraceForImpact,
}

impl Caption {
    pub fn text(self) -> &'static str {
        match self {
            Caption::SafeLanding => "Safe landing! 🏡",
            Caption::Greeting => "Hi from Rajesh",
            Caption::Destination => "Neptune, here I come! 🌌",
            Caption::CloseCall => "WHOA! That was close! ☄️💨",
            Caption::Jumping => "Woohooo! We're jumping! 🎢",
            Caption::Ignition => "Ignition! 🚀",
            Caption::ComposePower => "COMPOSE POWEEEERRR! ✨",
            Caption::BraceForImpact => "Brace for impact! ☄️",
        }
    }
}

/// Which direction of travel a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Ascending,
    Descending,
    Either,
}

impl Heading {
    fn matches(self, descending: bool) -> bool {
        match self {
            Heading::Ascending => !descending,
            Heading::Descending => descending,
            Heading::Either => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionRule {
    pub heading: Heading,
    pub min: f32,
    pub below: f32,
    pub caption: Caption,
}

impl CaptionRule {
    const fn new(heading: Heading, min: f32, below: f32, caption: Caption) -> Self {
        Self { heading, min, below, caption }
    }

    pub fn matches(&self, altitude: f32, descending: bool) -> bool {
        self.heading.matches(descending) && altitude >= self.min && altitude < self.below
    }
}

const ANY: f32 = f32::NEG_INFINITY;
const TOP: f32 = f32::INFINITY;

pub const CAPTION_RULES: [CaptionRule; 9] = [
    CaptionRule::new(Heading::Descending, ANY, 0.02, Caption::SafeLanding),
    CaptionRule::new(Heading::Ascending, ANY, 0.05, Caption::Greeting),
    CaptionRule::new(Heading::Ascending, 0.70, TOP, Caption::Destination),
    CaptionRule::new(Heading::Descending, 0.85, TOP, Caption::Destination),
    CaptionRule::new(Heading::Ascending, 0.50, TOP, Caption::CloseCall),
    CaptionRule::new(Heading::Ascending, 0.20, TOP, Caption::Jumping),
    CaptionRule::new(Heading::Ascending, ANY, TOP, Caption::Ignition),
    CaptionRule::new(Heading::Descending, 0.40, TOP, Caption::ComposePower),
    CaptionRule::new(Heading::Either, ANY, TOP, Caption::BraceForImpact),
];

/// Caption for the given altitude and direction. Pure.
pub fn caption_for(altitude: f32, descending: bool) -> Caption {
    CAPTION_RULES
        .iter()
        .find(|rule| rule.matches(altitude, descending))
        .map(|rule| rule.caption)
        .unwrap_or(Caption::BraceForImpact)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: bool = false;
    const DOWN: bool = true;

    #[test]
    fn low_altitude_depends_on_direction() {
        assert_eq!(caption_for(0.01, UP), Caption::Greeting);
        assert_eq!(caption_for(0.01, DOWN), Caption::SafeLanding);
        assert_eq!(caption_for(0.75, UP), Caption::Destination);
    }

    #[test]
    fn ascending_boundaries() {
        assert_eq!(caption_for(0.0499, UP), Caption::Greeting);
        assert_eq!(caption_for(0.05, UP), Caption::Ignition);
        assert_eq!(caption_for(0.1999, UP), Caption::Ignition);
        assert_eq!(caption_for(0.20, UP), Caption::Jumping);
        assert_eq!(caption_for(0.4999, UP), Caption::Jumping);
        assert_eq!(caption_for(0.50, UP), Caption::CloseCall);
        assert_eq!(caption_for(0.6999, UP), Caption::CloseCall);
        assert_eq!(caption_for(0.70, UP), Caption::Destination);
        assert_eq!(caption_for(1.0, UP), Caption::Destination);
    }

    #[test]
    fn descending_boundaries() {
        assert_eq!(caption_for(1.0, DOWN), Caption::Destination);
        assert_eq!(caption_for(0.85, DOWN), Caption::Destination);
        assert_eq!(caption_for(0.8499, DOWN), Caption::ComposePower);
        assert_eq!(caption_for(0.40, DOWN), Caption::ComposePower);
        assert_eq!(caption_for(0.3999, DOWN), Caption::BraceForImpact);
        assert_eq!(caption_for(0.02, DOWN), Caption::BraceForImpact);
        assert_eq!(caption_for(0.0199, DOWN), Caption::SafeLanding);
    }

    #[test]
    fn every_input_resolves() {
        for i in 0..=1000 {
            let alt = i as f32 / 1000.0;
            for descending in [UP, DOWN] {
                let rule = CAPTION_RULES.iter().position(|r| r.matches(alt, descending));
                assert!(rule.is_some(), "no rule for ({}, {})", alt, descending);
            }
        }
    }

    #[test]
    fn texts_are_distinct_per_caption() {
        assert_eq!(Caption::Greeting.text(), "Hi from Rajesh");
        assert_eq!(Caption::Ignition.text(), "Ignition! 🚀");
        assert_ne!(Caption::SafeLanding.text(), Caption::BraceForImpact.text());
    }
}
