/// Main application entry point for ReviewLens.
/// A single page hosting the review search component.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::review_search::ReviewSearch;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ReviewLens"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div>
            <h1>{ "ReviewLens" }</h1>
            // Input, trigger and results container for one fetch-render cycle.
            <ReviewSearch />
        </div>
    }
}
