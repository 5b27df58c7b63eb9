//! Auth-dependent navigation.

use serde::Serialize;

use crate::access::{permits, Capability};
use crate::models::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavView {
    pub admin_links: bool,
    pub login_link: bool,
    pub logout_button: bool,
}

pub fn render_nav(session: &Session) -> NavView {
    let signed_in = session.is_authenticated();
    NavView {
        admin_links: permits(session.role(), Capability::AdminLinks),
        login_link: !signed_in,
        logout_button: signed_in,
    }
}
