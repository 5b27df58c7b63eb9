//! Plain-text surface for `PageView`.

use std::fmt::{self, Display, Formatter};

use super::{ApplicationsView, CardAction, GridView, PageView};

impl Display for CardAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.enabled() {
            write!(f, "[{}]", self.label())
        } else {
            write!(f, "({})", self.label())
        }
    }
}

impl Display for PageView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut links = vec!["Home", "Events"];
        if self.nav.admin_links {
            links.push("Admin");
        }
        if self.nav.login_link {
            links.push("Login");
        }
        if self.nav.logout_button {
            links.push("Logout");
        }
        writeln!(f, "== {} == {}", self.page, links.join(" | "))?;

        if let Some(metrics) = &self.metrics {
            writeln!(
                f,
                "Events: {}  Volunteers: {}  Hours: {}",
                metrics.events,
                metrics.volunteers_label(),
                metrics.hours
            )?;
        }

        if let Some(filters) = &self.filters {
            let pills: Vec<String> = filters
                .pills
                .iter()
                .map(|p| {
                    if p.active {
                        format!("*{}*", p.value)
                    } else {
                        p.value.clone()
                    }
                })
                .collect();
            writeln!(f, "Filter: {}", pills.join(" "))?;
        }

        match &self.event_grid {
            Some(GridView::Empty { message }) => writeln!(f, "{}", message)?,
            Some(GridView::Cards(cards)) => {
                for card in cards {
                    writeln!(f)?;
                    writeln!(f, "[{}] {}", card.tag, card.title)?;
                    writeln!(f, "  {}", card.meta)?;
                    writeln!(f, "  {}", card.tagline)?;
                    writeln!(f, "  Slots left: {}  {}", card.slots_left, card.action)?;
                }
            }
            None => {}
        }

        if let Some(applications) = &self.my_applications {
            writeln!(f)?;
            writeln!(f, "My applications")?;
            match applications {
                ApplicationsView::Rows(rows) => {
                    for row in rows {
                        writeln!(f, "  {} ({})", row.event_name, row.status)?;
                    }
                }
                other => writeln!(f, "  {}", other.message().unwrap_or_default())?,
            }
        }

        if let Some(rows) = &self.event_table {
            writeln!(f)?;
            writeln!(f, "Events")?;
            for row in rows {
                writeln!(
                    f,
                    "  #{} {} | {} | {} | {} slots | {} applicants",
                    row.event_id, row.name, row.date, row.category, row.slots, row.applicants
                )?;
            }
        }

        if let Some(rows) = &self.volunteer_table {
            writeln!(f)?;
            writeln!(f, "Volunteers")?;
            for row in rows {
                writeln!(f, "  {} | {} | {}", row.name, row.skill, row.availability)?;
            }
        }

        Ok(())
    }
}
