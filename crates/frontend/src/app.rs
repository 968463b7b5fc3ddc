use crate::domain::recipient_search::RecipientSearchView;
use crate::domain::region_map::RegionMapView;
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::shared::reference_data::ReferenceCache;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Справочники живут в context и загружаются один раз на сессию.
    provide_context(ReferenceCache::new());

    view! {
        <div class="app">
            <Header />
            <div class="content">
                <RegionMapView />
                <div class="info-wrapper">
                    <RecipientSearchView />
                </div>
            </div>
            <Footer />
        </div>
    }
}
