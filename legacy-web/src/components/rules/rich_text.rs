use legacy_core::{Block, split_blocks};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub text: AttrValue,
}

/// Rule description split into paragraphs and `- ` bullet lists.
#[function_component(RichText)]
pub fn rich_text(p: &Props) -> Html {
    html! {
        <div class="rich-text">
            { for split_blocks(&p.text).into_iter().map(|block| match block {
                Block::List(items) => html! {
                    <ul class="list-disc">
                        { for items.into_iter().map(|item| html! { <li>{ item }</li> }) }
                    </ul>
                },
                Block::Paragraph(text) => html! {
                    <p class="whitespace-pre-line">{ text }</p>
                },
            }) }
        </div>
    }
}
