use crate::shared::icons::icon;
use leptos::prelude::*;

/// Integer with thin-space thousands grouping
fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{2009}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Card tone, mapped to a CSS modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Info,
    Danger,
    Success,
}

impl CardTone {
    fn class(&self) -> &'static str {
        match self {
            CardTone::Info => "stat-card stat-card--info",
            CardTone::Danger => "stat-card stat-card--error",
            CardTone::Success => "stat-card stat-card--success",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Count to show (None = loading/error)
    #[prop(into)]
    value: Signal<Option<usize>>,
    tone: CardTone,
    /// Optional link text under the value ("View patients")
    #[prop(optional, into)]
    link_label: Option<String>,
    #[prop(optional)]
    on_link: Option<Callback<()>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "\u{2014}".to_string(),
    };

    let link_view = link_label.map(|text| {
        view! {
            <button
                class="stat-card__link"
                on:click=move |_| {
                    if let Some(cb) = on_link {
                        cb.run(());
                    }
                }
            >
                {text}
                {icon("chevron-right")}
            </button>
        }
    });

    view! {
        <div class=tone.class()>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {link_view}
            </div>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1200), "1\u{2009}200");
    }
}
