use astra::Request;

use crate::app::{now_naive, AppState};
use crate::auth::session::Session;
use crate::db::listings::{all_listings, find_listing};
use crate::domain::feed::{feed_page, FeedTab};
use crate::domain::filter::filter_listings;
use crate::domain::listing::Listing;
use crate::domain::role::{Role, Viewer};
use crate::domain::sort::{sort_listings, SortKey};
use crate::errors::ServerError;
use crate::handlers::{require_role, Access};
use crate::params::{FormParams, SearchRequest};
use crate::responses::{html_response, ResultResp};
use crate::templates::components::Notice;
use crate::templates::pages::{
    all_rooms_page, home_page, room_detail_page, searcher_page, HomeVm, SearchVm,
};

pub fn home(req: &Request, state: &AppState, session: Option<&Session>) -> ResultResp {
    let params = FormParams::from_query(req);
    let tab = FeedTab::parse(params.get("tab"));
    let count = params.number::<usize>("count")?;

    // The public feed is the approved catalogue, newest first.
    let listings = state.db.with_conn(|conn| all_listings(conn))?;
    let approved = sort_listings(Viewer::Anonymous.visible(&listings), SortKey::Newest);
    let feed = feed_page(&approved, tab, count, &state.config.feed, now_naive());

    html_response(home_page(&HomeVm {
        user: session.map(|s| &s.user),
        tab,
        feed,
        notice: Notice::parse(params.get("notice")),
    }))
}

/// Visible listings for `viewer`, then filter, then sort.
fn run_search(
    state: &AppState,
    viewer: &Viewer<'_>,
    search: &SearchRequest,
) -> Result<(Vec<Listing>, usize), ServerError> {
    let listings = state.db.with_conn(|conn| all_listings(conn))?;
    let visible = viewer.visible(&listings);
    let results = sort_listings(
        filter_listings(&visible, &search.filters, &search.query),
        search.sort,
    );

    tracing::debug!(
        query = %search.query,
        filters = search.filters.active_count(),
        sort = search.sort.as_str(),
        results = results.len(),
        "search"
    );
    Ok((results, visible.len()))
}

pub fn searcher_dashboard(req: &Request, state: &AppState, session: Option<&Session>) -> ResultResp {
    let session = match require_role(session, Role::Searcher)? {
        Access::Granted(s) => s,
        Access::SignIn(resp) => return Ok(resp),
    };

    let search = SearchRequest::from_params(&FormParams::from_query(req))?;
    let viewer = Viewer::Signed(&session.user);
    let (results, total) = run_search(state, &viewer, &search)?;

    html_response(searcher_page(&SearchVm {
        user: Some(&session.user),
        search,
        results,
        total,
    }))
}

/// Public list: approved rooms only, whoever is asking.
pub fn all_rooms(req: &Request, state: &AppState, session: Option<&Session>) -> ResultResp {
    let search = SearchRequest::from_params(&FormParams::from_query(req))?;
    let (results, total) = run_search(state, &Viewer::Anonymous, &search)?;

    html_response(all_rooms_page(&SearchVm {
        user: session.map(|s| &s.user),
        search,
        results,
        total,
    }))
}

/// Hidden listings answer 404, same as missing ones.
pub fn room_detail(state: &AppState, session: Option<&Session>, id: &str) -> ResultResp {
    let viewer = Viewer::from_user(session.map(|s| &s.user));
    let listing = state
        .db
        .with_conn(|conn| find_listing(conn, id))?
        .filter(|l| viewer.can_view(l))
        .ok_or(ServerError::NotFound)?;

    html_response(room_detail_page(&listing, &viewer))
}
