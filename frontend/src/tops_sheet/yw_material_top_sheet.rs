use uuid::Uuid;
use yew::{classes, html, AttrValue, Callback, Component, Context, Html, Properties};

/// Modal sheet sliding down from the top of the viewport.
///
/// Visibility is driven by the `open` prop: the `show` class is present exactly
/// while it is true. The close button and backdrop click emit `on_close`,
/// unless `dismissable` is false (a request is in flight).
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub on_close: Callback<()>,
    #[prop_or(true)]
    pub dismissable: bool,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let title_id = format!("{}-title", self.id);
        let close = {
            let on_close = props.on_close.clone();
            let dismissable = props.dismissable;
            Callback::from(move |_| {
                if dismissable {
                    on_close.emit(());
                }
            })
        };

        html! {
            <div
                class="top-sheet-backdrop"
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;justify-content:center;align-items:flex-start;"
                onclick={close.clone()}
            >
                <div
                    class={classes!("top-sheet", "show")}
                    id={self.id.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                    style="position:relative;margin-top:48px;max-width:640px;width:90vw;max-height:85vh;overflow-y:auto;background:#fff;border-radius:8px;padding:24px;"
                    onclick={Callback::from(|e: web_sys::MouseEvent| e.stop_propagation())}
                >
                    <button
                        onclick={close}
                        disabled={!props.dismissable}
                        aria-label="Close"
                        style="position:absolute;top:12px;right:16px;padding:0.25rem 0.75rem;font-size:1.25rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                    >
                        { "✕" }
                    </button>
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
