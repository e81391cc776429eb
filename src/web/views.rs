use maud::{html, Markup, DOCTYPE};

use crate::explore::Exploration;
use crate::models::Landmark;

const BOOTSTRAP_CSS_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
                title { (title) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS_URL);
            }
            body {
                nav class="navbar navbar-dark bg-dark mb-4" {
                    div class="container" {
                        a class="navbar-brand" href="/" { "Landmark Explorer" }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}

pub fn index() -> Markup {
    page("Landmark Explorer", search_form())
}

pub fn results(exploration: &Exploration) -> Markup {
    page(
        "Landmarks",
        html! {
            h1 class="h3 mb-3" {
                "Landmarks in " span id="city" { (exploration.city) }
            }
            @if let Some(center) = exploration.center {
                p class="text-muted" { "Centred on " (center.to_string()) }
            }
            @if exploration.landmarks.is_empty() {
                p class="empty-state alert alert-secondary" { "No landmarks found." }
            } @else {
                (landmark_table(&exploration.landmarks))
            }
            (search_form())
        },
    )
}

fn search_form() -> Markup {
    html! {
        form class="row g-2 my-4" action="/landmarks" method="POST" {
            div class="col-auto" {
                label class="visually-hidden" for="city-input" { "City" }
                input class="form-control" type="text" id="city-input" name="city"
                    placeholder="Enter a city" required;
            }
            div class="col-auto" {
                button class="btn btn-primary" type="submit" { "Explore" }
            }
        }
    }
}

fn landmark_table(landmarks: &[Landmark]) -> Markup {
    html! {
        table class="table table-striped" {
            thead {
                tr {
                    th { "Name" }
                    th { "Category" }
                    th { "Rating" }
                    th { "ID" }
                    th { "Distance" }
                }
            }
            tbody {
                @for landmark in landmarks {
                    tr class="landmark" {
                        td { (landmark.display_name()) }
                        td { (landmark.kinds) }
                        td {
                            @match &landmark.rate {
                                Some(rate) => { (rate.to_string()) }
                                None => { "N/A" }
                            }
                        }
                        td { code { (landmark.xid) } }
                        td {
                            @if let Some(dist) = landmark.dist {
                                (format!("{:.0} m", dist))
                            }
                        }
                    }
                }
            }
        }
    }
}
