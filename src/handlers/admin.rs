use astra::Request;

use crate::app::{now_naive, AppState};
use crate::auth::session::Session;
use crate::db::listings::{all_listings, find_listing, save_status};
use crate::db::users::all_users;
use crate::domain::role::Role;
use crate::domain::stats::{ListingStats, StatusTab, UserStats};
use crate::domain::status::{ModerationAction, ModerationStatus};
use crate::errors::ServerError;
use crate::handlers::{require_role, Access};
use crate::params::FormParams;
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::components::Notice;
use crate::templates::pages::{admin_page, AdminVm};

pub fn dashboard(req: &Request, state: &AppState, session: Option<&Session>) -> ResultResp {
    let session = match require_role(session, Role::Admin)? {
        Access::Granted(s) => s,
        Access::SignIn(resp) => return Ok(resp),
    };
    let params = FormParams::from_query(req);
    let tab = StatusTab::parse(params.get("tab"), StatusTab::Only(ModerationStatus::Pending));

    let listings = state.db.with_conn(|conn| all_listings(conn))?;
    let users = state.db.with_conn(|conn| all_users(conn))?;

    html_response(admin_page(&AdminVm {
        user: &session.user,
        listing_stats: ListingStats::from_listings(&listings),
        user_stats: UserStats::from_users(&users),
        tab,
        listings: tab.select(&listings),
        notice: Notice::parse(params.get("notice")),
    }))
}

/// `POST /admin/rooms/{id}/{approve|reject}`.
pub fn moderate(state: &AppState, session: Option<&Session>, id: &str, action: &str) -> ResultResp {
    let session = match require_role(session, Role::Admin)? {
        Access::Granted(s) => s,
        Access::SignIn(resp) => return Ok(resp),
    };
    let action: ModerationAction = action.parse().map_err(|_| ServerError::NotFound)?;

    let status = state.db.with_conn(|conn| {
        let mut listing = find_listing(conn, id)?.ok_or(ServerError::NotFound)?;
        let from = listing.status;
        let to = listing.moderate(action, now_naive())?;
        save_status(conn, &listing.id, from, to, listing.updated_at)?;
        Ok(to)
    });

    let status = match status {
        Ok(status) => status,
        Err(err) => {
            tracing::warn!(listing_id = id, %action, error = %err, "moderation failed");
            return Err(err);
        }
    };

    tracing::info!(listing_id = id, admin_id = %session.user.id, %status, "listing moderated");
    let notice = match action {
        ModerationAction::Approve => Notice::Approved,
        ModerationAction::Reject => Notice::Rejected,
    };
    redirect(&format!("/admin?tab=pending&notice={}", notice.as_str()))
}
