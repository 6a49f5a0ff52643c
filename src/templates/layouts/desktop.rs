use crate::domain::user::User;
use maud::{html, Markup, DOCTYPE};

/// Page shell. `user` drives the nav: a dashboard link and sign-out for
/// signed-in users, a sign-in link otherwise.
pub fn desktop_layout(title: &str, user: Option<&User>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | RoomRental Nepal" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a class="brand" href="/" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#524ed2"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        span { "RoomRental Nepal" }
                    }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/rooms" { "All Rooms" } }
                            @if let Some(user) = user {
                                li { a href=(user.role.dashboard_path()) { "Dashboard" } }
                            }
                        }
                    }
                    @match user {
                        Some(user) => {
                            div class="account" {
                                span class="who" { (user.first_name()) " · " (user.role.title()) }
                                form action="/logout" method="post" class="inline" {
                                    button type="submit" class="btn btn-ghost" { "Sign out" }
                                }
                            }
                        }
                        None => {
                            a href="/login" class="btn" { "Sign in" }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "Find your perfect room in Nepal." }
                }
            }
        }
    }
}
