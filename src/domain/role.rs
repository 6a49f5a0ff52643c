// src/domain/role.rs
use crate::domain::listing::Listing;
use crate::domain::status::{ModerationAction, ModerationStatus};
use crate::domain::user::User;

labelled_enum!(Role, "role" {
    Searcher => "searcher",
    Owner => "owner",
    Admin => "admin",
});

/// What a listing card offers to the person looking at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingAction {
    ViewDetails,
    ContactOwner,
    Approve,
    Reject,
}

/// Per-role rules. One row per `Role` variant, looked up by `Role::policy`.
#[derive(Debug)]
struct RolePolicy {
    dashboard: &'static str,
    title: &'static str,
    sees_every_status: bool,
    sees_own_listings: bool,
    shows_status: bool,
    contacts_owners: bool,
    moderates: bool,
}

const SEARCHER: RolePolicy = RolePolicy {
    dashboard: "/searcher",
    title: "Room Searcher",
    sees_every_status: false,
    sees_own_listings: false,
    shows_status: false,
    contacts_owners: true,
    moderates: false,
};

const OWNER: RolePolicy = RolePolicy {
    dashboard: "/owner",
    title: "Room Owner",
    sees_every_status: false,
    sees_own_listings: true,
    shows_status: true,
    contacts_owners: false,
    moderates: false,
};

const ADMIN: RolePolicy = RolePolicy {
    dashboard: "/admin",
    title: "Administrator",
    sees_every_status: true,
    sees_own_listings: true,
    shows_status: true,
    contacts_owners: false,
    moderates: true,
};

impl Role {
    fn policy(self) -> &'static RolePolicy {
        match self {
            Role::Searcher => &SEARCHER,
            Role::Owner => &OWNER,
            Role::Admin => &ADMIN,
        }
    }

    pub fn dashboard_path(self) -> &'static str {
        self.policy().dashboard
    }

    pub fn title(self) -> &'static str {
        self.policy().title
    }

    pub fn shows_status(self) -> bool {
        self.policy().shows_status
    }

    /// Approved listings are public; everything else is limited to its owner and admins.
    pub fn can_view(self, viewer_id: &str, listing: &Listing) -> bool {
        let policy = self.policy();
        listing.status == ModerationStatus::Approved
            || policy.sees_every_status
            || (policy.sees_own_listings && listing.is_owned_by(viewer_id))
    }

    pub fn actions_for(self, viewer_id: &str, listing: &Listing) -> Vec<ListingAction> {
        if !self.can_view(viewer_id, listing) {
            return Vec::new();
        }

        let policy = self.policy();
        let mut actions = vec![ListingAction::ViewDetails];

        if policy.contacts_owners && !listing.is_owned_by(viewer_id) {
            actions.push(ListingAction::ContactOwner);
        }
        if policy.moderates {
            for action in listing.status.allowed_actions() {
                actions.push(match action {
                    ModerationAction::Approve => ListingAction::Approve,
                    ModerationAction::Reject => ListingAction::Reject,
                });
            }
        }

        actions
    }
}

/// Whoever is making the request. Anonymous visitors browse like searchers.
#[derive(Debug, Clone, Copy)]
pub enum Viewer<'a> {
    Anonymous,
    Signed(&'a User),
}

impl<'a> Viewer<'a> {
    pub fn from_user(user: Option<&'a User>) -> Self {
        match user {
            Some(user) => Viewer::Signed(user),
            None => Viewer::Anonymous,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Viewer::Anonymous => Role::Searcher,
            Viewer::Signed(user) => user.role,
        }
    }

    pub fn user(&self) -> Option<&'a User> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Signed(user) => Some(*user),
        }
    }

    fn id(&self) -> &str {
        match self {
            Viewer::Anonymous => "",
            Viewer::Signed(user) => &user.id,
        }
    }

    pub fn can_view(&self, listing: &Listing) -> bool {
        self.role().can_view(self.id(), listing)
    }

    pub fn actions_for(&self, listing: &Listing) -> Vec<ListingAction> {
        self.role().actions_for(self.id(), listing)
    }

    pub fn shows_status(&self) -> bool {
        self.role().shows_status()
    }

    /// The subset of `listings` this viewer may see, in input order.
    pub fn visible(&self, listings: &[Listing]) -> Vec<Listing> {
        listings
            .iter()
            .filter(|l| self.can_view(l))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;

    fn with_status(id: &str, owner: &str, status: ModerationStatus) -> Listing {
        let mut l = fixtures::listing(id, 10_000);
        l.owner_id = owner.to_string();
        l.status = status;
        l
    }

    fn catalogue() -> Vec<Listing> {
        vec![
            with_status("a", "2", ModerationStatus::Approved),
            with_status("p", "2", ModerationStatus::Pending),
            with_status("r", "2", ModerationStatus::Rejected),
            with_status("x", "9", ModerationStatus::Pending),
        ]
    }

    #[test]
    fn searchers_and_visitors_only_see_approved() {
        let searcher = fixtures::user("1", Role::Searcher);
        for viewer in [Viewer::Anonymous, Viewer::Signed(&searcher)] {
            assert_eq!(fixtures::ids(&viewer.visible(&catalogue())), vec!["a"]);
        }
    }

    #[test]
    fn owners_see_their_own_listings_in_any_status() {
        let owner = fixtures::user("2", Role::Owner);
        let viewer = Viewer::Signed(&owner);
        assert_eq!(fixtures::ids(&viewer.visible(&catalogue())), vec!["a", "p", "r"]);
    }

    #[test]
    fn admins_see_everything() {
        let admin = fixtures::user("3", Role::Admin);
        let viewer = Viewer::Signed(&admin);
        assert_eq!(viewer.visible(&catalogue()).len(), 4);
    }

    #[test]
    fn admins_moderate_only_pending_listings() {
        let admin = fixtures::user("3", Role::Admin);
        let viewer = Viewer::Signed(&admin);
        let all = catalogue();

        assert_eq!(
            viewer.actions_for(&all[1]),
            vec![ListingAction::ViewDetails, ListingAction::Approve, ListingAction::Reject]
        );
        assert_eq!(viewer.actions_for(&all[0]), vec![ListingAction::ViewDetails]);
    }

    #[test]
    fn searchers_can_contact_owners() {
        let actions = Viewer::Anonymous.actions_for(&catalogue()[0]);
        assert_eq!(actions, vec![ListingAction::ViewDetails, ListingAction::ContactOwner]);
    }

    #[test]
    fn hidden_listings_offer_no_actions() {
        assert!(Viewer::Anonymous.actions_for(&catalogue()[1]).is_empty());
    }

    #[test]
    fn each_role_has_its_own_dashboard() {
        assert_eq!(Role::Searcher.dashboard_path(), "/searcher");
        assert_eq!(Role::Owner.dashboard_path(), "/owner");
        assert_eq!(Role::Admin.dashboard_path(), "/admin");
        assert!(!Role::Searcher.shows_status());
        assert!(Role::Admin.shows_status());
    }
}
