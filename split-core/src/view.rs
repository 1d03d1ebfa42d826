//! Display values derived from the dashboard state.
//!
//! Everything here is a pure function of [`DashboardState`] and the current
//! user, so a frontend only has to lay the values out.

use crate::route::Route;
use crate::state::DashboardState;
use crate::types::{CurrentUser, Friend};

pub const CURRENCY_SYMBOL: &str = "₹";

/// Shown when a friend has no profile picture.
pub const DEFAULT_AVATAR_URL: &str =
    "https://tse1.mm.bing.net/th/id/OIP.aYhGylaZyL4Dj0CIenZPlAHaHa?rs=1&pid=ImgDetMain";

/// Viewport width (logical px) from which the desktop layout is used.
pub const DESKTOP_BREAKPOINT: f32 = 768.0;

/// Direction of a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The current user owes money. Drawn red.
    Owe,
    /// The current user is owed money. Drawn green.
    Receive,
}

impl Tone {
    pub fn of(amount: f64) -> Self {
        if amount < 0.0 {
            Tone::Owe
        } else {
            Tone::Receive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Owe => "owe",
            Tone::Receive => "receive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    pub fn for_width(width: f32) -> Self {
        if width < DESKTOP_BREAKPOINT {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }
}

/// `₹` followed by the number in its shortest form (`50`, `12.5`).
pub fn format_amount(amount: f64) -> String {
    // Avoid rendering "-0" for a negative zero.
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// Like [`format_amount`] but drops the sign.
pub fn format_magnitude(amount: f64) -> String {
    format_amount(amount.abs())
}

#[derive(Debug, Clone, PartialEq)]
pub struct FriendRow {
    pub username: String,
    pub name: String,
    pub handle: String,
    pub avatar_url: String,
    pub amount: String,
    pub tone: Tone,
    pub route: Route,
}

impl FriendRow {
    pub fn new(friend: &Friend, user: &CurrentUser) -> Self {
        Self {
            username: friend.username.clone(),
            name: friend.name.clone(),
            handle: format!("@{}", friend.username),
            avatar_url: friend.picture().unwrap_or(DEFAULT_AVATAR_URL).to_string(),
            amount: format_magnitude(friend.total_amount),
            tone: Tone::of(friend.total_amount),
            route: Route::transactions(&user.username, &friend.username),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    /// Aggregate owed by the current user, sign dropped.
    pub total_owe: String,
    /// Aggregate owed to the current user, shown as received.
    pub total_receive: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub summary: SummaryView,
    pub rows: Vec<FriendRow>,
}

impl DashboardView {
    pub fn build(state: &DashboardState, user: &CurrentUser) -> Self {
        Self {
            summary: SummaryView {
                total_owe: format_magnitude(state.total_give()),
                total_receive: format_amount(state.total_take()),
            },
            rows: state
                .friends()
                .iter()
                .map(|friend| FriendRow::new(friend, user))
                .collect(),
        }
    }

    pub fn row(&self, username: &str) -> Option<&FriendRow> {
        self.rows.iter().find(|row| row.username == username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionsSummary;

    fn friend(username: &str, amount: f64) -> Friend {
        Friend {
            username: username.to_string(),
            name: username.to_uppercase(),
            profile_picture: None,
            total_amount: amount,
        }
    }

    fn loaded(friends: Vec<Friend>, give: f64, take: f64) -> DashboardState {
        let mut state = DashboardState::default();
        state.apply_summary(TransactionsSummary {
            friends,
            total_give: give,
            total_take: take,
        });
        state.finish_fetch(true);
        state
    }

    #[test]
    fn test_one_row_per_friend_with_magnitudes() {
        let state = loaded(
            vec![friend("a", -50.0), friend("b", 50.0), friend("c", 12.5)],
            -50.0,
            62.5,
        );
        let view = DashboardView::build(&state, &CurrentUser::new("me"));

        assert_eq!(view.rows.len(), 3);
        let amounts: Vec<&str> = view.rows.iter().map(|r| r.amount.as_str()).collect();
        assert_eq!(amounts, vec!["₹50", "₹50", "₹12.5"]);
    }

    #[test]
    fn test_sign_selects_tone() {
        let me = CurrentUser::new("me");
        let owe = FriendRow::new(&friend("a", -50.0), &me);
        let receive = FriendRow::new(&friend("b", 50.0), &me);
        let settled = FriendRow::new(&friend("c", 0.0), &me);

        assert_eq!(owe.tone, Tone::Owe);
        assert_eq!(owe.tone.label(), "owe");
        assert_eq!(owe.amount, "₹50");
        assert_eq!(receive.tone, Tone::Receive);
        assert_eq!(receive.tone.label(), "receive");
        assert_eq!(receive.amount, "₹50");
        assert_eq!(settled.tone, Tone::Receive);
    }

    #[test]
    fn test_total_owe_drops_sign_total_receive_does_not() {
        let state = loaded(Vec::new(), -120.0, -5.0);
        let view = DashboardView::build(&state, &CurrentUser::new("me"));
        assert_eq!(view.summary.total_owe, "₹120");
        assert_eq!(view.summary.total_receive, "₹-5");
    }

    #[test]
    fn test_row_route_and_avatar() {
        let me = CurrentUser::new("asha");
        let mut with_picture = friend("ravi", 10.0);
        with_picture.profile_picture = Some("https://img/ravi.png".to_string());

        let row = FriendRow::new(&with_picture, &me);
        assert_eq!(row.route.path(), "/transactions/asha--ravi");
        assert_eq!(row.handle, "@ravi");
        assert_eq!(row.avatar_url, "https://img/ravi.png");

        let row = FriendRow::new(&friend("kabir", 10.0), &me);
        assert_eq!(row.avatar_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_format_amount_shortest_form() {
        assert_eq!(format_amount(0.0), "₹0");
        assert_eq!(format_amount(-0.0), "₹0");
        assert_eq!(format_amount(1500.0), "₹1500");
        assert_eq!(format_magnitude(-0.75), "₹0.75");
    }

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(Layout::for_width(375.0), Layout::Mobile);
        assert_eq!(Layout::for_width(767.9), Layout::Mobile);
        assert_eq!(Layout::for_width(768.0), Layout::Desktop);
        assert_eq!(Layout::for_width(1440.0), Layout::Desktop);
    }
}
