//! Scanner screen: camera permission gate, simulated scan, and result review.

use leptos::prelude::*;

use crate::components::quantity_stepper::QuantityStepper;
use crate::controller::AppController;
use crate::state::app::AppState;
use crate::state::camera::CameraPermission;

/// Scanner page. Shows the permission prompt, the viewfinder, or the denial
/// fallback depending on camera permission, plus any results awaiting review.
#[component]
pub fn CameraPage() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();

    let permission = Memo::new(move |_| state.with(|s| s.camera.permission));
    let has_results = Memo::new(move |_| state.with(|s| !s.camera.pending.is_empty()));

    view! {
        <div class="scan-page">
            <header class="scan-page__header">
                <span class="scan-page__icon">"📸"</span>
                <h1>"Smart Scanner"</h1>
                <p>"Point your camera at vegetables & fruits"</p>
            </header>
            {move || {
                if has_results.get() {
                    return view! { <ScanReview/> }.into_any();
                }
                match permission.get() {
                    CameraPermission::Unknown => view! { <StartCameraPrompt/> }.into_any(),
                    CameraPermission::Granted => view! { <Viewfinder/> }.into_any(),
                    CameraPermission::Denied => view! { <PermissionDenied/> }.into_any(),
                }
            }}
        </div>
    }
}

/// Ask the browser for the camera and record the answer.
fn request_camera(controller: AppController) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let granted = crate::util::camera::request_access().await;
            controller.resolve_camera_permission(granted);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        controller.resolve_camera_permission(false);
    }
}

#[component]
fn StartCameraPrompt() -> impl IntoView {
    let controller = expect_context::<AppController>();

    view! {
        <div class="scan-page__viewfinder scan-page__viewfinder--idle">
            <p>"AI will detect vegetables, fruits & ingredients"</p>
            <button class="btn btn--primary" on:click=move |_| request_camera(controller.clone())>
                "Start Camera"
            </button>
        </div>
    }
}

/// Attach a live camera stream to `video` for as long as the viewfinder is
/// mounted. Losing access after the grant drops back to the denied state.
#[cfg(feature = "csr")]
fn attach_preview(video: NodeRef<leptos::html::Video>, controller: AppController) {
    use crate::util::camera::{open_stream, stop_stream};

    let stream = StoredValue::new_local(None::<web_sys::MediaStream>);

    leptos::task::spawn_local(async move {
        let Some(media) = open_stream().await else {
            controller.resolve_camera_permission(false);
            return;
        };
        if let Some(element) = video.get_untracked() {
            element.set_src_object(Some(&media));
        }
        let held = media.clone();
        if stream.try_update_value(|slot| *slot = Some(held)).is_none() {
            // Unmounted while the request was pending.
            stop_stream(&media);
        }
    });

    on_cleanup(move || {
        if let Some(Some(media)) = stream.try_update_value(Option::take) {
            stop_stream(&media);
        }
    });
}

#[component]
fn Viewfinder() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let controller = expect_context::<AppController>();

    let video_ref = NodeRef::<leptos::html::Video>::new();
    #[cfg(feature = "csr")]
    attach_preview(video_ref, controller.clone());

    let processing = move || state.with(|s| s.camera.processing);
    let on_scan = move |_| {
        controller.scan();
    };

    view! {
        <div class="scan-page__viewfinder">
            <video class="scan-page__video" node_ref=video_ref autoplay=true playsinline=true muted=true></video>
            <div class="scan-page__frame">
                <p>"📸 Position your vegetables and fruits in the frame"</p>
            </div>
            {move || processing().then(|| view! {
                <div class="scan-page__processing">"🔍 Scanning for fresh ingredients..."</div>
            })}
        </div>
        <div class="scan-page__actions">
            <button class="btn btn--primary scan-page__capture" on:click=on_scan disabled=processing>
                {move || if processing() { "Processing..." } else { "Scan Ingredients" }}
            </button>
        </div>
    }
}

#[component]
fn PermissionDenied() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let controller = expect_context::<AppController>();

    let processing = move || state.with(|s| s.camera.processing);
    let on_retry = {
        let controller = controller.clone();
        move |_| request_camera(controller.clone())
    };
    let on_upload = move |_| {
        controller.upload_photo();
    };

    view! {
        <div class="scan-page__denied">
            <h2>"Camera Permission Needed"</h2>
            <p>
                "To scan your kitchen items, we need access to your camera. Please allow camera permissions and try again."
            </p>
            <button class="btn btn--primary" on:click=on_retry>
                "Enable Camera"
            </button>
            <button class="btn btn--ghost" on:click=on_upload disabled=processing>
                {move || if processing() { "Processing..." } else { "Upload Photo Instead" }}
            </button>
        </div>
    }
}

#[component]
fn ScanReview() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let controller = expect_context::<AppController>();

    let on_confirm = {
        let controller = controller.clone();
        move |_| {
            controller.confirm_scan();
        }
    };
    let on_discard = move |_| controller.discard_scan();

    view! {
        <div class="scan-review">
            <h3 class="scan-review__title">"Items Detected"</h3>
            <ul class="scan-review__list">
                {move || {
                    state
                        .with(|s| s.camera.pending.clone())
                        .into_iter()
                        .map(|detection| {
                            let initial = detection.name.chars().next().unwrap_or('?').to_string();
                            let quantity = detection.quantity;
                            let confidence = format!("{}% confidence", detection.confidence_percent());
                            view! {
                                <li class="scan-review__item">
                                    <span class="scan-review__initial">{initial}</span>
                                    <div class="scan-review__details">
                                        <span class="scan-review__name">{detection.name}</span>
                                        <span class="scan-review__confidence">{confidence}</span>
                                    </div>
                                    <QuantityStepper quantity=quantity/>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <div class="scan-review__actions">
                <button class="btn btn--primary" on:click=on_confirm>
                    "Add to Pantry"
                </button>
                <button class="btn btn--ghost" on:click=on_discard>
                    "Scan Again"
                </button>
            </div>
        </div>
    }
}
