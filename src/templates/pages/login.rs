use crate::templates::desktop_layout;
use maud::{html, Markup};

const DEMO_ACCOUNTS: [(&str, &str, &str); 3] = [
    ("Room Searcher", "searcher@example.com", "searcher123"),
    ("Room Owner", "owner@example.com", "owner123"),
    ("Administrator", "admin@example.com", "admin123"),
];

pub fn login_page(email: &str, error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        html! {
            main class="container narrow" {
                h1 { "Welcome Back" }
                p class="lead" { "Sign in to find or list rooms." }

                @if let Some(error) = error {
                    div class="notice notice-error" role="alert" { (error) }
                }

                form class="card" method="post" action="/login" {
                    label {
                        "Email"
                        input type="email" name="email" value=(email) required autofocus;
                    }
                    label {
                        "Password"
                        input type="password" name="password" required;
                    }
                    button type="submit" class="btn" { "Sign in" }
                }

                section class="card" {
                    h2 { "Quick Login (Demo)" }
                    @for (label, email, password) in DEMO_ACCOUNTS {
                        form method="post" action="/login" class="demo-login" {
                            input type="hidden" name="email" value=(email);
                            input type="hidden" name="password" value=(password);
                            button type="submit" class="btn btn-ghost" {
                                strong { (label) } " " span class="muted" { (email) }
                            }
                        }
                    }
                }
            }
        },
    )
}
