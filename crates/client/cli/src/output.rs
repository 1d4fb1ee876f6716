//! Human-readable rendering of session results.

use console::style;

use tank_core::{ActionReport, DailyTasksState, Mood, StatusView};
use tank_runtime::ActionOutcome;

pub fn print_outcome(outcome: &ActionOutcome) {
    if let Some(rejection) = &outcome.rejection {
        println!("{} {}", style("✗").red().bold(), rejection);
        return;
    }

    println!("{} Done", style("✓").green().bold());
    if let Some(report) = &outcome.report {
        print_report(report);
    }
}

fn print_report(report: &ActionReport) {
    if let Some(reset) = &report.daily_reset {
        println!(
            "  New day {}: streak {} (best {})",
            style(&reset.date).cyan(),
            reset.current_streak,
            reset.longest_streak
        );
    }
    if let Some(reward) = &report.task_reward {
        println!(
            "  Task {} complete: +{} coins, +{} XP",
            style(&reward.task_id).cyan(),
            reward.coins,
            reward.xp
        );
    }
    if report.coins_awarded > 0 || report.xp_awarded > 0 {
        println!(
            "  Earned {} coins and {} XP",
            style(report.coins_awarded).yellow(),
            style(report.xp_awarded).yellow()
        );
    }
    if let Some(level_up) = &report.level_up {
        println!(
            "  {} Level {} → {}",
            style("Level up!").magenta().bold(),
            level_up.previous_level,
            level_up.new_level
        );
    }
}

pub fn print_status(view: &StatusView) {
    println!("{} {}", style("Mood:").bold(), mood_label(view.mood));
    print_bar("Hunger", view.needs.hunger);
    print_bar("Cleanliness", view.needs.cleanliness);
    print_bar("Happiness", view.needs.happiness);
    println!(
        "{} {}  ({} / {} XP)",
        style("Level").bold(),
        view.level,
        view.xp,
        view.xp_for_next_level
    );
    println!("{} {}", style("Coins").bold(), style(view.coins).yellow());
    println!(
        "{} {}/{} done, streak {} (best {})",
        style("Tasks").bold(),
        view.tasks_completed,
        view.tasks_total,
        view.current_streak,
        view.longest_streak
    );
}

pub fn print_tasks(tasks: &DailyTasksState) {
    for task in &tasks.tasks {
        let mark = if task.is_completed {
            style("✓").green()
        } else {
            style("·").dim()
        };
        println!(
            "{} {:<14} {} (+{} coins, +{} XP)",
            mark,
            task.id,
            task.description,
            task.reward_coins,
            task.reward_xp
        );
    }
}

fn print_bar(label: &str, value: f32) {
    const WIDTH: usize = 20;
    let filled = ((value / 100.0) * WIDTH as f32).round().clamp(0.0, WIDTH as f32) as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled));
    let bar = if value < 30.0 {
        style(bar).red()
    } else {
        style(bar).green()
    };
    println!("{label:<12} {bar} {value:>5.1}");
}

fn mood_label(mood: Mood) -> console::StyledObject<&'static str> {
    match mood {
        Mood::Happy => style("happy").green(),
        Mood::Neutral => style("neutral"),
        Mood::Hungry => style("hungry").yellow(),
        Mood::Dirty => style("dirty").yellow(),
        Mood::Sad => style("sad").red(),
    }
}
