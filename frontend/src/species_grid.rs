use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct SpeciesGridProps {
    /// Narrowest a card may get before the grid drops a column.
    #[prop_or(260)]
    pub min_card_width_px: u32,
    pub children: Children,
}

/// Responsive grid holding the catalog's species cards.
pub struct SpeciesGrid;

impl Component for SpeciesGrid {
    type Message = ();
    type Properties = SpeciesGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SpeciesGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 16px;
             max-width: 1200px;
             margin: auto;
             padding: 16px;",
            props.min_card_width_px
        );

        html! {
            <div class="species-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
