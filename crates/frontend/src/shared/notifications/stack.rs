use super::NotificationCenter;
use contracts::shared::notification::{NotificationId, Phase};
use leptos::prelude::*;

/// Inline style of a banner: opacity follows the phase, fading over `fade_ms`.
pub fn banner_style(phase: Phase, fade_ms: u32) -> String {
    format!(
        "opacity: {}; transition: opacity {}ms ease;",
        phase.opacity(),
        fade_ms
    )
}

/// Стек баннеров, самый свежий сверху.
#[component]
pub fn NotificationStack(center: NotificationCenter) -> impl IntoView {
    view! {
        <For
            each=move || center.ids()
            key=|id| *id
            children=move |id| view! { <Banner center=center id=id /> }
        />
    }
}

#[component]
fn Banner(center: NotificationCenter, id: NotificationId) -> impl IntoView {
    let fade_ms = center.timeline().fade_ms;
    let style = move || banner_style(center.phase(id), fade_ms);

    center.get(id).map(|item| {
        view! {
            <div class=item.severity.css_class() role="alert" style=style>
                <i class=item.severity.icon_class()></i>
                <span>{item.message}</span>
                <button
                    type="button"
                    class="alert-close"
                    aria-label="Close"
                    on:click=move |_| center.dismiss(id)
                >
                    "\u{00d7}"
                </button>
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_style_follows_phase() {
        assert_eq!(
            banner_style(Phase::Shown, 300),
            "opacity: 1; transition: opacity 300ms ease;"
        );
        assert_eq!(
            banner_style(Phase::Fading, 300),
            "opacity: 0; transition: opacity 300ms ease;"
        );
    }
}
