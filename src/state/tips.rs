//! Rotating kitchen tips shown on the floating banner.

pub const TIPS: [&str; 8] = [
    "🥕 Did you know? Carrots get sweeter when stored in the fridge!",
    "🍅 Pro tip: Store tomatoes at room temperature for better flavor!",
    "🥬 Keep lettuce crisp by wrapping it in paper towels!",
    "🍆 Eggplants are best used within 3-4 days of purchase!",
    "🌽 Corn tastes sweetest when eaten the same day it's picked!",
    "🥒 Cucumbers last longer when stored unwashed!",
    "🥑 Speed up avocado ripening by storing with bananas!",
    "🍋 Roll lemons before juicing to get more juice out!",
];

#[must_use]
pub fn next_tip_index(current: usize) -> usize {
    (current + 1) % TIPS.len()
}

#[must_use]
pub fn tip(index: usize) -> &'static str {
    TIPS[index % TIPS.len()]
}
