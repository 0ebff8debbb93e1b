//! Dashboard avatar with the direct → proxied → initials recovery chain.

use api::avatar::{initials_avatar, AvatarFallback, AvatarSource, FallbackStep};
use api::UserRecord;
use dioxus::prelude::*;

use crate::use_sheet_client;

/// Avatar image for `user`. On a load failure the endpoint's Drive proxy is
/// tried at most once, then the initials placeholder takes over for good.
#[component]
pub fn Avatar(
    user: UserRecord,
    #[props(default = "avatar".to_string())] class: String,
) -> Element {
    let client = use_sheet_client();
    let name = user.display_name().to_string();

    let (initial, machine) = AvatarFallback::for_user(&user);
    let mut fallback = use_signal(move || machine);
    let mut src = use_signal({
        let name = name.clone();
        move || match initial {
            AvatarSource::Url(url) => url,
            AvatarSource::Initials => initials_avatar(&name),
        }
    });

    let alt = name.clone();
    let onerror = move |_| {
        let client = client.clone();
        let name = name.clone();
        async move {
            match fallback.write().on_load_error() {
                FallbackStep::FetchProxy(id) => {
                    tracing::warn!("avatar failed to load, trying the image proxy");
                    match client.fetch_image(&id).await {
                        Ok(Some(data_url)) => src.set(data_url),
                        Ok(None) => src.set(initials_avatar(&name)),
                        Err(e) => {
                            tracing::warn!("image proxy fetch failed: {e}");
                            src.set(initials_avatar(&name));
                        }
                    }
                }
                FallbackStep::UseInitials => src.set(initials_avatar(&name)),
            }
        }
    };

    rsx! {
        img {
            class: "{class}",
            alt: "{alt}",
            src: "{src}",
            onerror: onerror,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{SheetClient, SheetConfig};

    #[component]
    fn Harness() -> Element {
        use_context_provider(|| SheetClient::new(SheetConfig::default()));
        let user = UserRecord {
            fullname: "Ada Lovelace".to_string(),
            avatar: "https://cdn.example.com/ada.png".to_string(),
            ..Default::default()
        };
        rsx! {
            Avatar { user }
        }
    }

    #[test]
    fn renders_img_with_display_name_alt_and_avatar_src() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("alt=\"Ada Lovelace\""), "html: {html}");
        assert!(html.contains("https://cdn.example.com/ada.png"), "html: {html}");
    }
}
