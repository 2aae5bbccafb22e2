/// Component to display a fetched list of reviews.
/// Renders nothing until a first result arrives, a placeholder for an
/// empty result, and otherwise one block per review in backend order.
use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: ReadSignal<Option<Vec<Review>>>) -> impl IntoView {
    view! {
        {move || match reviews.get() {
            None => ().into_view(),
            Some(list) if list.is_empty() => {
                view! { <p>{ "No reviews found." }</p> }.into_view()
            }
            Some(list) => list
                .into_iter()
                .map(|review| {
                    view! {
                        <div class="review">
                            <h3>{ review.title }</h3>
                            <p>{ review.body }</p>
                            <p>{ format!("Rating: {}", review.rating) }</p>
                            <p>{ format!("Reviewer: {}", review.reviewer) }</p>
                            <hr/>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
                .into_view(),
        }}
    }
}
