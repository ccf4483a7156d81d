//! Image gallery with wrap-around navigation.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;

use crate::data::ImageRef;

/// How long the cosmetic swap indicator stays up after a transition.
/// Independent of actual image load completion.
pub const SWAP_INDICATOR_DURATION: Duration = Duration::from_millis(200);

/// Next gallery index, wrapping from the last image to the first.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 || current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Previous gallery index, wrapping from the first image to the last.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

/// Product image gallery.
///
/// Navigation arrows and the thumbnail strip only render when there is
/// more than one image; zero images renders a placeholder tile.
#[component]
pub fn ImageGallery(images: Vec<ImageRef>, name: String) -> impl IntoView {
    if images.is_empty() {
        return view! {
            <div class="product-gallery">
                <div class="gallery-main gallery-main--empty">
                    <span class="gallery-placeholder">"No image available"</span>
                </div>
            </div>
        }
        .into_any();
    }

    let image_count = images.len();
    let (selected, set_selected) = signal(0usize);
    let (swapping, set_swapping) = signal(false);

    let select = move |index: usize| {
        set_swapping.set(true);
        set_selected.set(index);
        set_timeout(move || set_swapping.set(false), SWAP_INDICATOR_DURATION);
    };

    let main_images = images.clone();
    let main_alt = name.clone();
    let thumbs = images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let url = image.url.clone();
            let alt = image
                .alt
                .clone()
                .unwrap_or_else(|| format!("{} {}", name, index + 1));
            view! {
                <button
                    class="gallery-thumb"
                    class=("gallery-thumb--active", move || selected.get() == index)
                    on:click=move |_| select(index)
                >
                    <img src=url alt=alt/>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="product-gallery">
            <div class="gallery-main">
                {move || {
                    swapping
                        .get()
                        .then(|| view! { <div class="gallery-overlay"><span class="spinner"></span></div> })
                }}
                <img
                    class="gallery-image"
                    src=move || {
                        main_images
                            .get(selected.get())
                            .map(|img| img.url.clone())
                            .unwrap_or_default()
                    }
                    alt=main_alt
                />
                {(image_count > 1)
                    .then(|| {
                        view! {
                            <button
                                class="gallery-nav gallery-nav--prev"
                                aria-label="Previous image"
                                on:click=move |_| select(prev_index(selected.get_untracked(), image_count))
                            >
                                "\u{2039}"
                            </button>
                            <button
                                class="gallery-nav gallery-nav--next"
                                aria-label="Next image"
                                on:click=move |_| select(next_index(selected.get_untracked(), image_count))
                            >
                                "\u{203a}"
                            </button>
                        }
                    })}
            </div>
            {(image_count > 1).then(|| view! { <div class="gallery-thumbs">{thumbs}</div> })}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        assert_eq!(prev_index(2, 3), 1);
        assert_eq!(prev_index(1, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
    }

    #[test]
    fn test_single_and_empty_lists_stay_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
