mod admin_tests;
mod auth_tests;
mod browse_tests;
mod dashboard_tests;
mod owner_tests;
