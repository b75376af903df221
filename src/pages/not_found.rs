use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the homepage"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #0D0D0D;
                    color: #FFFFFF;
                    font-family: Satoshi, -apple-system, BlinkMacSystemFont, sans-serif;
                }

                .not-found h1 {
                    font-size: 6rem;
                    margin: 0;
                    color: #FF6B35;
                }

                .not-found-link {
                    margin-top: 1.5rem;
                    color: #FF8C42;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
