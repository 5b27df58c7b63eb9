//! Event grid and category filter bar.

use serde::Serialize;

use crate::access::{permits, Capability};
use crate::models::{Event, Role};

pub const EMPTY_GRID: &str = "No events yet. Check back soon.";

/// Active category filter of the event grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a filter pill value; `all` disables filtering.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => Filter::All,
            category => Filter::Category(category.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => "all",
            Filter::Category(category) => category,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => event.category.as_deref() == Some(category.as_str()),
        }
    }
}

/// Primary action of an event card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Apply { event_id: i64 },
    Applied,
    Full,
    /// Shown to anyone who cannot apply; never mutates anything.
    Details,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Apply { .. } => "Apply",
            CardAction::Applied => "Applied",
            CardAction::Full => "Full",
            CardAction::Details => "Details",
        }
    }

    pub fn enabled(&self) -> bool {
        matches!(self, CardAction::Apply { .. } | CardAction::Details)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    pub event_id: i64,
    pub tag: String,
    pub title: String,
    pub meta: String,
    pub tagline: String,
    pub slots_left: u64,
    pub action: CardAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridView {
    Empty { message: &'static str },
    Cards(Vec<EventCard>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterPill {
    pub value: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterBarView {
    pub pills: Vec<FilterPill>,
}

pub fn card_action(role: Role, event: &Event) -> CardAction {
    if !permits(role, Capability::ApplyToEvents) {
        return CardAction::Details;
    }
    if event.is_applied() {
        CardAction::Applied
    } else if event.has_open_slots() {
        CardAction::Apply { event_id: event.id }
    } else {
        CardAction::Full
    }
}

fn render_card(role: Role, event: &Event) -> EventCard {
    EventCard {
        event_id: event.id,
        tag: event.category_or_default().to_string(),
        title: event.name.clone(),
        meta: format!("{} · {}", event.date, event.venue),
        tagline: event.tagline.clone(),
        slots_left: event.slots_left(),
        action: card_action(role, event),
    }
}

/// Filter, truncate to `limit` (0 = all) and render the event cards.
pub fn render_grid(role: Role, events: &[Event], filter: &Filter, limit: usize) -> GridView {
    let take = if limit == 0 { usize::MAX } else { limit };
    let cards: Vec<EventCard> = events
        .iter()
        .filter(|ev| filter.matches(ev))
        .take(take)
        .map(|ev| render_card(role, ev))
        .collect();

    if cards.is_empty() {
        GridView::Empty {
            message: EMPTY_GRID,
        }
    } else {
        GridView::Cards(cards)
    }
}

/// `all` followed by each category in order of first appearance. The active
/// filter keeps its pill even when no loaded event carries that category.
pub fn render_filter_bar(events: &[Event], filter: &Filter) -> FilterBarView {
    let mut values = vec!["all".to_string()];
    for ev in events {
        if let Some(category) = ev.category.as_deref().filter(|c| !c.is_empty()) {
            if !values.iter().any(|v| v == category) {
                values.push(category.to_string());
            }
        }
    }
    if !values.iter().any(|v| v == filter.as_str()) {
        values.push(filter.as_str().to_string());
    }

    let pills = values
        .into_iter()
        .map(|value| FilterPill {
            active: value == filter.as_str(),
            value,
        })
        .collect();

    FilterBarView { pills }
}
