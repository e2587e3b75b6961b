//! Plain-text trip report for the terminal

use std::fmt::Write;

use crate::plan::TripPlan;

const CURRENCY: &str = "лв";
const PROGRESS_WIDTH: usize = 20;

/// Format a money amount with two decimals and the currency suffix
#[must_use]
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2} {CURRENCY}")
}

/// Render `ratio` (already clamped to `[0, 1]`) as a fixed-width bar
#[must_use]
pub fn progress_bar(ratio: f64) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled),
        ratio * 100.0
    )
}

/// Verdict line shown under the totals
#[must_use]
pub fn budget_verdict(within_budget: bool) -> &'static str {
    if within_budget {
        "✅ Бюджетът е достатъчен!"
    } else {
        "❌ Бюджетът не достига."
    }
}

/// Render the whole plan: route, stops, itemized costs and budget status
#[must_use]
pub fn render(plan: &TripPlan) -> String {
    let mut out = String::new();
    let estimate = &plan.estimate;

    // Writing into a String cannot fail
    let _ = writeln!(out, "🗺️ Маршрут: {}", plan.route_label);
    let _ = writeln!(out, "{}", plan.route_line);
    let _ = writeln!(
        out,
        "{} · {} · {} дни · {} пътници",
        plan.transport, plan.tier, plan.days, plan.travelers
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "🏙️ Градове");
    for city in &plan.itinerary {
        let _ = writeln!(out, "📍 {} ({})", city.name, city.coordinates.format_coordinates());
        let _ = writeln!(out, "   🏨 {} – {} {CURRENCY}", city.hotel.name, city.hotel.nightly_rate);
        let _ = writeln!(out, "   🍽️ {} – {} {CURRENCY}", city.food.label, city.food.daily_rate);
        let _ = writeln!(out, "   🏛️ {}", city.landmark);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "💰 Разходи");
    let _ = writeln!(out, "   Транспорт: {}", format_money(estimate.transport_cost));
    let _ = writeln!(out, "   Храна:     {}", format_money(estimate.food_cost));
    let _ = writeln!(out, "   Хотели:    {}", format_money(estimate.hotel_cost));
    let _ = writeln!(out, "   💵 Общо:   {}", format_money(estimate.total_cost));
    let _ = writeln!(out, "   Бюджет:    {}", format_money(plan.budget));
    let _ = writeln!(out, "   {}", progress_bar(estimate.budget_ratio));
    let _ = writeln!(out, "{}", budget_verdict(estimate.within_budget));

    out
}
