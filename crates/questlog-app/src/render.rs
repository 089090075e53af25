//! Text rendering for the terminal

use console::style;
use questlog_domain::{
    DailySummary, DayProgress, GameState, LevelTier, Objective, ObjectiveTemplate,
    ProgressionEvent,
};

pub fn event_message(event: &ProgressionEvent) -> String {
    match event {
        ProgressionEvent::ExperienceGained {
            objective_name,
            amount,
            ..
        } => format!("Mission complete! +{} XP in {}", amount, objective_name),
        ProgressionEvent::LeveledUp {
            objective_name,
            new_level,
            ..
        } => format!("LEVEL UP! {} is now level {}", objective_name, new_level),
    }
}

pub fn print_events(events: &[ProgressionEvent]) {
    for event in events {
        let line = event_message(event);
        match event {
            ProgressionEvent::ExperienceGained { .. } => println!("{}", style(line).green()),
            ProgressionEvent::LeveledUp { .. } => println!("{}", style(line).yellow().bold()),
        }
    }
}

pub fn motivation(summary: &DailySummary) -> String {
    match summary.progress() {
        DayProgress::AllComplete => "Every mission done today. Unstoppable!".to_string(),
        DayProgress::InProgress => format!(
            "Great progress: {} of {} missions done.",
            summary.completed_today, summary.total_objectives
        ),
        DayProgress::NotStarted => "Time to start today's adventure!".to_string(),
    }
}

pub fn template_line(template: &ObjectiveTemplate) -> String {
    format!("{} {} ({} min/day)", template.icon, template.name, template.base_minutes)
}

pub fn objective_line(objective: &Objective) -> String {
    let check = if objective.completed_today() { "x" } else { " " };
    format!(
        "[{}] {} {:<18} lvl {:>2} ({:<8}) {:>5.1}%  streak {:>3}  {:>3} min/day  id {}",
        check,
        objective.icon(),
        objective.name(),
        objective.level(),
        objective.tier(),
        objective.progress_percent(),
        objective.streak(),
        objective.daily_time_minutes(),
        objective.id(),
    )
}

pub fn print_dashboard(state: &GameState) {
    let stats = state.player_stats();
    let summary = state.daily_summary();

    println!("{}", style("Questlog").bold());
    println!(
        "Total level {}  |  {} XP  |  best streak {}  |  {} missions  |  {}h invested",
        stats.total_level,
        stats.total_experience,
        stats.current_streak,
        stats.completed_missions,
        summary.total_hours_spent,
    );
    println!(
        "Today: {}/{} ({:.0}%)  {}",
        summary.completed_today,
        summary.total_objectives,
        summary.completion_percent(),
        motivation(&summary),
    );
    println!();

    for objective in state.objectives() {
        let line = objective_line(objective);
        let styled = match objective.tier() {
            _ if objective.completed_today() => style(line).dim(),
            LevelTier::Platinum => style(line).magenta(),
            LevelTier::Gold => style(line).yellow(),
            LevelTier::Silver => style(line).white(),
            LevelTier::Bronze => style(line).red(),
        };
        println!("{}", styled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questlog_domain::ObjectiveId;

    #[test]
    fn test_event_messages() {
        let gained = ProgressionEvent::ExperienceGained {
            objective_id: ObjectiveId::new("obj-1"),
            objective_name: "Leer".to_string(),
            amount: 9,
        };
        let leveled = ProgressionEvent::LeveledUp {
            objective_id: ObjectiveId::new("obj-1"),
            objective_name: "Leer".to_string(),
            new_level: 2,
        };

        assert_eq!(event_message(&gained), "Mission complete! +9 XP in Leer");
        assert_eq!(event_message(&leveled), "LEVEL UP! Leer is now level 2");
    }

    #[test]
    fn test_motivation_follows_progress() {
        let summary = |done, total| DailySummary {
            completed_today: done,
            total_objectives: total,
            total_hours_spent: 0,
        };

        assert_eq!(motivation(&summary(3, 3)), "Every mission done today. Unstoppable!");
        assert_eq!(motivation(&summary(1, 3)), "Great progress: 1 of 3 missions done.");
        assert_eq!(motivation(&summary(0, 3)), "Time to start today's adventure!");
    }

    #[test]
    fn test_template_line() {
        let leer = ObjectiveTemplate::find("Leer").unwrap();
        assert_eq!(template_line(leer), "📖 Leer (45 min/day)");
    }
}
