use maud::{html, Markup};

/// A titled section. `badge` is shown next to the title when set,
/// e.g. a result count.
pub fn card(title: &str, badge: Option<usize>, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 {
                (title)
                @if let Some(n) = badge {
                    " " span class="badge" { (n) }
                }
            }
            div class="card-body" {
                (body)
            }
        }
    }
}
