//! Recipe suggestions drawn from the static catalog.

use leptos::prelude::*;

use crate::controller::AppController;
use crate::state::app::{AppState, ViewType};
use crate::state::recipes::Recipe;

/// Recipes page. Suggestions only make sense once the pantry has something in it.
#[component]
pub fn RecipesPage() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let controller = expect_context::<AppController>();

    let has_inventory = Memo::new(move |_| state.with(|s| !s.inventory.is_empty()));
    let go_to = Callback::new(move |target: ViewType| controller.switch_view(target));

    view! {
        <div class="recipes-page">
            <header class="recipes-page__header">
                <span class="recipes-page__icon">"👨‍🍳"</span>
                <h1>"Recipe Magic"</h1>
                <p>"Delicious recipes with your ingredients"</p>
            </header>
            <Show
                when=move || has_inventory.get()
                fallback=move || {
                    view! {
                        <div class="recipes-page__empty">
                            <h3>"Add Ingredients First"</h3>
                            <p>"Scan some ingredients first, and I'll suggest amazing recipes you can make!"</p>
                            <button class="btn btn--primary" on:click=move |_| go_to.run(ViewType::Camera)>
                                "📸 Scan Ingredients"
                            </button>
                        </div>
                    }
                }
            >
                {move || {
                    let (featured, rest): (Vec<Recipe>, Vec<Recipe>) =
                        state.with(|s| s.recipes.iter().cloned().partition(|r| r.is_suggestion));
                    view! {
                        {featured.into_iter().next().map(|recipe| view! { <FeaturedRecipe recipe=recipe/> })}
                        <ul class="recipes-page__list">
                            {rest.into_iter().map(|recipe| view! { <RecipeRow recipe=recipe/> }).collect::<Vec<_>>()}
                        </ul>
                    }
                }}
                <button class="btn btn--secondary" on:click=move |_| go_to.run(ViewType::Chat)>
                    "💬 Ask VeggieAI for Custom Recipes"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn FeaturedRecipe(recipe: Recipe) -> impl IntoView {
    let minutes = format!("⏱️ {} min", recipe.cooking_time);
    let servings = format!("👥 {} servings", recipe.servings);
    let difficulty = format!("🔥 {}", recipe.difficulty.label());

    view! {
        <section class="recipe-featured">
            <div class="recipe-featured__top">
                <div>
                    <h3>"🌟 Perfect Match"</h3>
                    <p>"Uses all your fresh ingredients"</p>
                </div>
                <span class="recipe-featured__emoji">{recipe.emoji()}</span>
            </div>
            <h2 class="recipe-featured__name">{recipe.name}</h2>
            <div class="recipe-featured__meta">
                <span>{minutes}</span>
                <span>{servings}</span>
                <span>{difficulty}</span>
            </div>
            <button class="btn btn--light">"Cook Now"</button>
        </section>
    }
}

#[component]
fn RecipeRow(recipe: Recipe) -> impl IntoView {
    let matched = format!("{}% match", recipe.match_percent());
    let minutes = format!("⏱️ {} min", recipe.cooking_time);
    let difficulty = format!("🔥 {}", recipe.difficulty.label());

    view! {
        <li class="recipe-row">
            <span class="recipe-row__emoji">{recipe.emoji()}</span>
            <div class="recipe-row__body">
                <div class="recipe-row__title">
                    <h3>{recipe.name}</h3>
                    <span class="recipe-row__match">{matched}</span>
                </div>
                <div class="recipe-row__meta">
                    <span>{minutes}</span>
                    <span>{difficulty}</span>
                </div>
            </div>
            <button class="recipe-row__open">"→"</button>
        </li>
    }
}
