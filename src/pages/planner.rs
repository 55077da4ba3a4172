//! Static weekly meal planner.

#[cfg(test)]
#[path = "planner_test.rs"]
mod planner_test;

use leptos::prelude::*;

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const FIRST_DATE: u32 = 8;
const TODAY_INDEX: usize = 3;
const WEEK_LABEL: &str = "Jan 8-14, 2025";

/// One meal slot; `planned` is `None` while the slot is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MealSlot {
    pub icon: &'static str,
    pub meal: &'static str,
    pub planned: Option<&'static str>,
}

pub const MEALS: [MealSlot; 3] = [
    MealSlot { icon: "🌅", meal: "Breakfast", planned: Some("Fresh Fruit Bowl") },
    MealSlot { icon: "☀️", meal: "Lunch", planned: None },
    MealSlot { icon: "🌙", meal: "Dinner", planned: None },
];

/// Day label, date, and whether it is highlighted as today.
pub fn week_days() -> Vec<(&'static str, u32, bool)> {
    DAYS.iter()
        .zip(FIRST_DATE..)
        .enumerate()
        .map(|(index, (day, date))| (*day, date, index == TODAY_INDEX))
        .collect()
}

#[component]
pub fn PlannerPage() -> impl IntoView {
    view! {
        <div class="planner-page">
            <header class="planner-page__header">
                <span class="planner-page__icon">"📅"</span>
                <h1>"Meal Planner"</h1>
                <p>"Plan your week, reduce waste"</p>
            </header>
            <section class="planner-week">
                <div class="planner-week__top">
                    <h3>"This Week"</h3>
                    <span>{WEEK_LABEL}</span>
                </div>
                <div class="planner-week__days">
                    {week_days()
                        .into_iter()
                        .map(|(day, date, today)| {
                            view! {
                                <div class="planner-week__day">
                                    <span class="planner-week__label">{day}</span>
                                    <span class="planner-week__date" class:planner-week__date--today=today>
                                        {date}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <ul class="planner-week__meals">
                    {MEALS
                        .iter()
                        .map(|slot| {
                            view! {
                                <li class="planner-meal" class:planner-meal--open=slot.planned.is_none()>
                                    <span class="planner-meal__icon">{slot.icon}</span>
                                    <div class="planner-meal__body">
                                        <p class="planner-meal__name">{slot.meal}</p>
                                        <p class="planner-meal__detail">{slot.planned.unwrap_or("Plan a meal")}</p>
                                    </div>
                                    {match slot.planned {
                                        Some(_) => view! { <span class="planner-meal__status">"✓ Planned"</span> }.into_any(),
                                        None => view! { <button class="planner-meal__add">"+ Add"</button> }.into_any(),
                                    }}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
            <button class="btn btn--primary">"🎯 Smart Weekly Plan"</button>
        </div>
    }
}
