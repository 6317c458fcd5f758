//! Boss Image Component
//!
//! Lazy-loaded image, or the placeholder text when the record has none.

use leptos::prelude::*;

use crate::view_model::{BossImage, IMAGE_PLACEHOLDER};

#[component]
pub fn BossImageView(image: Option<BossImage>) -> impl IntoView {
    match image {
        Some(image) => view! {
            <img src=image.src alt=image.alt loading="lazy" />
        }.into_any(),
        None => view! {
            <span class="image-placeholder">{IMAGE_PLACEHOLDER}</span>
        }.into_any(),
    }
}
