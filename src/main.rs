//! Interactive terminal demo of the Tradeworks savings estimator.
//!
//! Walks the seven-step survey on stdin, shows the reveal copy after
//! each answer, and renders the animated results frames.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use tradeworks_roi::application::SurveySession;
use tradeworks_roi::config::AppConfig;
use tradeworks_roi::domain::foundation::{PracticeOption, TeamSize};
use tradeworks_roi::domain::wizard::WizardStep;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    println!("Tradeworks savings estimator");
    println!("Answer a few questions about how your business runs today.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let team_size = prompt_number(&mut lines, "How many people are on your team?")?;
    let mut session = SurveySession::new(
        TeamSize::new(team_size),
        config.pricing.to_table(),
        config.reveal.to_config(),
    );
    session.next()?;

    while let WizardStep::Question { category } = session.step() {
        println!("\n[{}] {}", session.progress(), category.question());
        let options = PracticeOption::options_for(category);
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {}", i + 1, option.label());
        }
        println!("  b) back");

        let Some(line) = lines.next().transpose()? else {
            println!("\nNo more input; exiting.");
            return Ok(());
        };
        let input = line.trim();

        if input.eq_ignore_ascii_case("b") {
            session.back();
            if session.step() == WizardStep::TeamSize {
                let n = prompt_number(&mut lines, "How many people are on your team?")?;
                session.set_team_size(n);
                session.next()?;
            }
            continue;
        }

        let Some(choice) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
        else {
            println!("  Please enter 1-{} or b.", options.len());
            continue;
        };

        if let Some(copy) = session.answer(*choice)? {
            println!("\n  {}", copy);
        }
        session.next()?;
    }

    // Results view: render the staged reveal.
    let mut frames = session
        .subscribe_reveal()
        .expect("results view must have an active animation");
    println!();
    while frames.changed().await.is_ok() {
        let frame = *frames.borrow();
        print!(
            "\r  Monthly savings {:>10}   Annual savings {:>12}   ROI {:>5}%",
            format!("{}", frame.monthly_savings),
            format!("{}", frame.annual_savings),
            frame.roi_percent
        );
        io::stdout().flush()?;
        if frame.completed {
            break;
        }
    }
    println!("\n");

    let result = session.estimate()?;
    println!("{}\n", result.verdict().headline());
    for line in &result.breakdown {
        let cost = if line.direct_cost.is_zero() {
            format!("{} hidden, {} hrs/mo", line.hidden_cost, line.hours_wasted)
        } else {
            format!("{} direct", line.direct_cost)
        };
        println!("  {:<22} {:<26} {}", line.category.to_string(), line.label, cost);
    }
    println!(
        "\n  Current spending {}/mo vs Tradeworks {} tier at {}/mo",
        result.total_current_spending, result.tier, result.tier_cost
    );
    println!(
        "  Time recovered: {} hrs/yr, worth about {}",
        result.hours_recovered_annually, result.value_of_time_recovered
    );

    if session.should_prompt_capture()? {
        println!("\n  Want this breakdown emailed to you? Enter your email on tradeworks.example/roi");
    }

    Ok(())
}

fn prompt_number(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<u32, io::Error> {
    loop {
        println!("{} (1-{})", prompt, TeamSize::MAX);
        match lines.next().transpose()? {
            Some(line) => match line.trim().parse::<u32>() {
                Ok(n) => return Ok(n),
                Err(_) => println!("  Please enter a number."),
            },
            None => return Ok(TeamSize::MIN),
        }
    }
}
