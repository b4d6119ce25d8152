use leptos::prelude::*;
use crate::state::AppState;
use crate::types::NoticeVariant;

#[component]
pub fn Toaster() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="toaster">
            {move || {
                state.notices.get().into_iter().map(|n| {
                    let class = match n.variant {
                        NoticeVariant::Default => "toast",
                        NoticeVariant::Destructive => "toast destructive",
                    };
                    let id = n.id;
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <div class="toast-title">{n.title}</div>
                                <div class="toast-desc">{n.description}</div>
                            </div>
                            <button class="toast-close" on:click=move |_| state.dismiss(id)>"\u{00d7}"</button>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
