pub mod add_room;
pub mod admin;
pub mod all_rooms;
pub mod home;
pub mod login;
pub mod owner;
pub mod room_detail;
pub mod searcher;

pub use add_room::add_room_page;
pub use admin::{admin_page, AdminVm};
pub use all_rooms::all_rooms_page;
pub use home::{home_page, HomeVm};
pub use login::login_page;
pub use owner::{owner_page, OwnerVm};
pub use room_detail::room_detail_page;
pub use searcher::{searcher_page, SearchVm};
