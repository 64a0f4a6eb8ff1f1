//! Avatar badge shown next to a quote.

use folio_model::{Testimonial, non_blank, placeholders};

pub const BADGE_BASE_CLASS: &str = "flex h-14 w-14 items-center justify-center rounded-full text-lg font-semibold text-white shadow-lg shadow-brand/20";

/// Fixed palette. Tokens outside it render neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Indigo,
    Emerald,
    Amber,
    Neutral,
}

impl BadgeColor {
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some("bg-indigo-500") => BadgeColor::Indigo,
            Some("bg-emerald-500") => BadgeColor::Emerald,
            Some("bg-amber-500") => BadgeColor::Amber,
            _ => BadgeColor::Neutral,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            BadgeColor::Indigo => "bg-indigo-500",
            BadgeColor::Emerald => "bg-emerald-500",
            BadgeColor::Amber => "bg-amber-500",
            BadgeColor::Neutral => "bg-slate-500",
        }
    }
}

/// Up to three uppercase characters from the badge, else the company.
pub fn badge_text(entry: &Testimonial) -> String {
    let source = non_blank(&entry.badge)
        .or_else(|| non_blank(&entry.company))
        .unwrap_or(placeholders::BADGE);
    source.chars().take(3).collect::<String>().to_uppercase()
}

pub fn badge_class(entry: &Testimonial) -> String {
    format!(
        "{BADGE_BASE_CLASS} {}",
        BadgeColor::from_token(entry.badge_color.as_deref()).class()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_prefers_badge_then_company() {
        let mut entry = Testimonial {
            company: Some("globex".into()),
            ..Default::default()
        };
        assert_eq!(badge_text(&entry), "GLO");
        entry.badge = Some("ab".into());
        assert_eq!(badge_text(&entry), "AB");
        assert_eq!(badge_text(&Testimonial::default()), "?");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let entry = Testimonial {
            badge: Some("éçàü".into()),
            ..Default::default()
        };
        assert_eq!(badge_text(&entry), "ÉÇÀ");
    }

    #[test]
    fn unknown_tokens_are_neutral() {
        assert_eq!(
            BadgeColor::from_token(Some("bg-emerald-500")),
            BadgeColor::Emerald
        );
        assert_eq!(
            BadgeColor::from_token(Some("bg-rose-500")),
            BadgeColor::Neutral
        );
        assert_eq!(BadgeColor::from_token(None), BadgeColor::Neutral);
    }
}
