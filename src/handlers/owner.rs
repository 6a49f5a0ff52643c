use std::collections::BTreeMap;

use astra::Request;

use crate::app::{now_naive, AppState};
use crate::auth::session::Session;
use crate::auth::token::new_listing_id;
use crate::db::listings::{insert_listing, listings_by_owner};
use crate::domain::new_listing::{field_messages, NewListingForm};
use crate::domain::role::Role;
use crate::domain::stats::{ListingStats, StatusTab};
use crate::errors::ServerError;
use crate::handlers::{require_role, Access};
use crate::params::{new_listing_form, FormParams};
use crate::responses::{html_response, html_with_status, redirect, ResultResp};
use crate::templates::components::Notice;
use crate::templates::pages::{add_room_page, owner_page, OwnerVm};

pub fn dashboard(req: &Request, state: &AppState, session: Option<&Session>) -> ResultResp {
    let session = match require_role(session, Role::Owner)? {
        Access::Granted(s) => s,
        Access::SignIn(resp) => return Ok(resp),
    };
    let params = FormParams::from_query(req);
    let tab = StatusTab::parse(params.get("tab"), StatusTab::All);

    let mine = state
        .db
        .with_conn(|conn| listings_by_owner(conn, &session.user.id))?;

    html_response(owner_page(&OwnerVm {
        user: &session.user,
        stats: ListingStats::from_listings(&mine),
        tab,
        listings: tab.select(&mine),
        notice: Notice::parse(params.get("notice")),
    }))
}

pub fn new_room(session: Option<&Session>) -> ResultResp {
    let session = match require_role(session, Role::Owner)? {
        Access::Granted(s) => s,
        Access::SignIn(resp) => return Ok(resp),
    };

    html_response(add_room_page(
        &session.user,
        &NewListingForm::default(),
        &BTreeMap::new(),
    ))
}

/// Invalid input re-renders the form with per-field messages (400).
pub fn create_room(req: Request, state: &AppState, session: Option<&Session>) -> ResultResp {
    let session = match require_role(session, Role::Owner)? {
        Access::Granted(s) => s,
        Access::SignIn(resp) => return Ok(resp),
    };

    let form = new_listing_form(&FormParams::from_body(req)?)?;
    let listing = match form.clone().into_listing(new_listing_id(), &session.user, now_naive()) {
        Ok(listing) => listing,
        Err(ServerError::Validation(errors)) => {
            let messages = field_messages(&errors);
            tracing::info!(user_id = %session.user.id, fields = ?messages.keys().collect::<Vec<_>>(), "room submission rejected");
            return html_with_status(400, add_room_page(&session.user, &form, &messages));
        }
        Err(other) => return Err(other),
    };

    state.db.with_conn(|conn| insert_listing(conn, &listing))?;
    tracing::info!(listing_id = %listing.id, owner_id = %listing.owner_id, "room submitted for review");

    redirect("/owner?tab=pending&notice=submitted")
}
