use leptos::*;
use leptos::logging::log;
use crate::api::{fetch_reviews, FetchError};
use crate::components::reviews_list::ReviewsList;
use crate::models::review::Review;

/// Applies one resolved fetch to the view signals, unless a newer request
/// was issued after `token` was taken. Returns whether the result was
/// applied; stale responses are dropped so the latest click always wins
/// the container.
pub fn apply_fetch_result(
    request_seq: StoredValue<u64>,
    token: u64,
    result: Result<Vec<Review>, FetchError>,
    set_reviews: WriteSignal<Option<Vec<Review>>>,
    set_error: WriteSignal<Option<String>>,
) -> bool {
    if request_seq.get_value() != token {
        return false;
    }
    match result {
        Ok(list) => {
            log!("[FETCH] Received {} reviews", list.len());
            set_error.set(None);
            set_reviews.set(Some(list));
        }
        Err(err) => {
            log!("[FETCH ERROR] {}", err);
            set_reviews.set(None);
            set_error.set(Some(format!("Failed to fetch reviews: {}", err)));
        }
    }
    true
}

/// URL input, fetch button, and the container the results render into.
/// One click runs one fetch-render cycle against `/api/reviews`.
#[component]
pub fn ReviewSearch() -> impl IntoView {
    let (url_value, set_url_value) = create_signal(String::new());
    let (reviews, set_reviews) = create_signal(None::<Vec<Review>>);
    let (error, set_error) = create_signal(None::<String>);
    // Token of the most recent click; responses carrying an older token
    // lost the race and are dropped instead of overwriting the container.
    let request_seq = store_value(0u64);

    let fetch_and_render = move |_| {
        let url = url_value.get_untracked();
        request_seq.update_value(|seq| *seq += 1);
        let token = request_seq.get_value();

        spawn_local(async move {
            log!("[FETCH] Requesting reviews for: {}", url);
            let result = fetch_reviews(&url).await;
            if !apply_fetch_result(request_seq, token, result, set_reviews, set_error) {
                log!("[FETCH] Dropping stale response for: {}", url);
            }
        });
    };

    view! {
        <div>
            <input
                type="text"
                id="url"
                placeholder="Enter a product page URL"
                prop:value=url_value
                on:input=move |ev| set_url_value.set(event_target_value(&ev))
            />
            <button id="fetch-reviews" on:click=fetch_and_render>
                { "Fetch Reviews" }
            </button>
            <div id="reviews-container">
                {move || match error.get() {
                    Some(message) => view! { <p class="error">{ message }</p> }.into_view(),
                    None => view! { <ReviewsList reviews=reviews /> }.into_view(),
                }}
            </div>
        </div>
    }
}
