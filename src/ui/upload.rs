//! Inspiration upload form.

use leptos::prelude::*;

use super::components::{Button, StrokeIcon};
use super::components::icons::IMAGE;
use super::render_html;

/// Message shown after a successful upload.
pub const UPLOAD_SUCCESS: &str = "Image uploaded successfully!";

/// Green or red outcome banner.
#[component]
pub fn UploadStatus(success: bool, message: String) -> impl IntoView {
    let tone = if success {
        "bg-green-100 text-green-700"
    } else {
        "bg-red-100 text-red-700"
    };
    let class = format!("text-center p-3 rounded-lg shrink-0 {tone}");
    let role = if success { "status" } else { "alert" };

    view! { <div class=class role=role>{message}</div> }
}

/// Outcome fragment swapped into `#upload-status`.
pub fn upload_status_html(success: bool, message: &str) -> String {
    let message = message.to_string();
    render_html(move || view! { <UploadStatus success=success message=message /> })
}

/// Form posting one image to `/api/inspiration`.
///
/// The submit button stays disabled until a file is chosen and while the
/// upload is in flight.
#[component]
pub fn ImageUpload(
    /// `accept` attribute of the picker.
    accept: String,
    /// Largest accepted image, already formatted (e.g. `10MB`).
    max_size: String,
) -> impl IntoView {
    let hint = format!("PNG, JPG, GIF up to {max_size}");
    let offline = upload_status_html(
        false,
        "Error uploading image: the server could not be reached",
    );

    view! {
        <div class="w-full h-[600px] flex items-stretch">
            <div class="w-full p-8 bg-white/80 backdrop-blur-sm rounded-2xl shadow-lg border border-wedding-blush/50 flex flex-col overflow-hidden">
                <div class="shrink-0">
                    <h2 class="text-3xl font-bold text-gray-800 mb-6 text-center">
                        "Upload Your Inspiration"
                    </h2>
                    <p class="text-gray-600 text-center mb-8">
                        "Share photos of your dream wedding style, venue, or decor ideas"
                    </p>
                </div>

                <form
                    id="inspiration-form"
                    class="flex-1 flex flex-col space-y-6 overflow-y-auto"
                    hx-post="/api/inspiration"
                    hx-encoding="multipart/form-data"
                    hx-target="#upload-status"
                    hx-swap="innerHTML"
                    x-data="{ fileName: '', preview: null, uploading: false }"
                    x-on:htmx:before-request.camel="uploading = true"
                    x-on:htmx:after-request.camel="uploading = false"
                    x-on:htmx:send-error.camel="uploading = false; document.getElementById('upload-status').innerHTML = $refs.offline.innerHTML"
                >
                    <div
                        class="relative w-full h-64 rounded-lg overflow-hidden border-2 border-wedding-blush shrink-0"
                        style="display: none"
                        x-show="preview"
                    >
                        <img x-bind:src="preview" alt="Preview" class="w-full h-full object-cover" />
                    </div>

                    <div class="flex flex-col items-center gap-4 shrink-0">
                        <label
                            for="image-upload"
                            class="cursor-pointer w-full py-8 px-6 border-2 border-dashed border-wedding-coral rounded-lg hover:border-wedding-salmon hover:bg-wedding-blush/20 transition-all duration-200 text-center"
                        >
                            <div class="flex flex-col items-center gap-2">
                                <StrokeIcon d=IMAGE class="w-12 h-12 text-wedding-coral" />
                                <span class="text-gray-700 font-medium" x-text="fileName || 'Click to select an image'">
                                    "Click to select an image"
                                </span>
                                <span class="text-sm text-gray-500">{hint}</span>
                            </div>
                        </label>
                        <input
                            id="image-upload"
                            name="image"
                            type="file"
                            accept=accept
                            class="hidden"
                            x-on:change="const f = $event.target.files[0]; if (f) { fileName = f.name; preview = URL.createObjectURL(f); document.getElementById('upload-status').innerHTML = '' }"
                        />

                        <Button
                            button_type="submit"
                            disabled=true
                            class="w-full shadow-lg hover:shadow-xl"
                            bind_disabled="!fileName || uploading"
                            bind_text="uploading ? 'Uploading...' : 'Upload Image'"
                        >
                            "Upload Image"
                        </Button>
                    </div>

                    <div id="upload-status" aria-live="polite"></div>
                    <div x-ref="offline" hidden=true inner_html=offline></div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Opening tag of the submit button.
    fn submit_tag(html: &str) -> &str {
        html.match_indices("<button")
            .map(|(start, _)| {
                let end = start + html[start..].find('>').unwrap();
                &html[start..end]
            })
            .find(|tag| tag.contains(r#"type="submit""#))
            .unwrap()
    }

    #[test]
    fn submit_button_starts_disabled() {
        let html =
            render_html(|| {
            view! { <ImageUpload accept={"image/*".to_string()} max_size={"10MB".to_string()} /> }
        });
        let tag = submit_tag(&html);
        let has_disabled_attr = tag.match_indices("disabled").any(|(i, _)| {
            !tag[i + "disabled".len()..].starts_with(':') && !tag[..i].ends_with("x-bind:")
        });
        assert!(has_disabled_attr, "{tag}");
        assert!(html.contains(r#"accept="image/*""#));
        assert!(html.contains("PNG, JPG, GIF up to 10MB"));
    }

    #[test]
    fn status_banner_colours_follow_outcome() {
        assert!(upload_status_html(true, UPLOAD_SUCCESS).contains("bg-green-100"));
        assert!(upload_status_html(false, "Upload failed. Please try again.").contains("bg-red-100"));
    }
}
