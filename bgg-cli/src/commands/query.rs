use bgg_core::{CollectionItem, GameDetails, UNKNOWN};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::{OutputFormat, Session, print_json};
use crate::error::CliError;

/// Render a numeric field, showing the unknown sentinel as a dash.
fn known(value: i32) -> String {
    if value == UNKNOWN {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn rating(value: f64) -> String {
    if value < 0.0 {
        "-".to_string()
    } else {
        format!("{value:.2}")
    }
}

fn print_empty(what: &str) {
    println!(
        "{}",
        format!("No {what} found").if_supports_color(Stdout, |t| t.dimmed())
    );
}

pub(crate) fn run_collection(username: &str, format: OutputFormat) -> Result<(), CliError> {
    let session = Session::open()?;
    let items = session.run(
        &format!("Loading collection of {username}..."),
        session.client.load_collection(username),
    );

    if format == OutputFormat::Json {
        return print_json(&items);
    }
    if items.is_empty() {
        print_empty("collection items");
        return Ok(());
    }

    let (expansions, base): (Vec<&CollectionItem>, Vec<&CollectionItem>) =
        items.iter().partition(|i| i.is_expansion);
    for (title, group) in [("Base games", base), ("Expansions", expansions)] {
        if group.is_empty() {
            continue;
        }
        println!(
            "{} ({})",
            title.if_supports_color(Stdout, |t| t.bold()),
            group.len()
        );
        for item in group {
            let status = if item.owned { "owned" } else { "" };
            println!(
                "  {:>7}  {}  {}  rank {}  rating {}  {}",
                item.game_id,
                item.name.if_supports_color(Stdout, |t| t.cyan()),
                format!("({})", known(item.year_published))
                    .if_supports_color(Stdout, |t| t.dimmed()),
                known(item.rank),
                rating(item.rating),
                status.if_supports_color(Stdout, |t| t.green()),
            );
        }
    }
    Ok(())
}

pub(crate) fn run_hot(format: OutputFormat) -> Result<(), CliError> {
    let session = Session::open()?;
    let games = session.run("Loading hot list...", session.client.load_hotness());

    if format == OutputFormat::Json {
        return print_json(&games);
    }
    if games.is_empty() {
        print_empty("hot games");
        return Ok(());
    }

    for game in &games {
        println!(
            "{:>3}. {} {}",
            game.rank,
            game.name.if_supports_color(Stdout, |t| t.cyan()),
            format!("({})", game.year_published).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

pub(crate) fn run_plays(username: &str, format: OutputFormat) -> Result<(), CliError> {
    let session = Session::open()?;
    let plays = session.run(
        &format!("Loading plays of {username}..."),
        session.client.load_last_plays(username),
    );

    if format == OutputFormat::Json {
        return print_json(&plays);
    }
    if plays.is_empty() {
        print_empty("plays");
        return Ok(());
    }

    for play in &plays {
        let date = if play.has_date() {
            play.play_date.to_string()
        } else {
            "undated".to_string()
        };
        println!(
            "  {}  {} x{}",
            date.if_supports_color(Stdout, |t| t.dimmed()),
            play.name.if_supports_color(Stdout, |t| t.cyan()),
            play.num_plays,
        );
    }
    Ok(())
}

pub(crate) fn run_game(game_id: i32, use_cache: bool, format: OutputFormat) -> Result<(), CliError> {
    let session = Session::open()?;
    let details = session.run(
        &format!("Loading game {game_id}..."),
        session.client.load_game(game_id, use_cache),
    );

    if format == OutputFormat::Json {
        return print_json(&details);
    }
    match details {
        Some(details) => print_game(&details),
        None => print_empty(&format!("game with id {game_id}")),
    }
    Ok(())
}

fn print_game(game: &GameDetails) {
    println!(
        "{} {}",
        game.name.if_supports_color(Stdout, |t| t.bold()),
        format!("({})", game.year_published).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if game.is_expansion {
        println!("  {}", "Expansion".if_supports_color(Stdout, |t| t.yellow()));
    }
    println!("  Rank:     {}", known(game.rank));
    println!(
        "  Rating:   {} (geek rating {})",
        rating(game.average_rating),
        rating(game.bgg_rating)
    );
    println!("  Players:  {}-{}", game.min_players, game.max_players);
    println!("  Time:     {} min", game.playing_time);

    for (label, names) in [
        ("Designers", &game.designers),
        ("Artists", &game.artists),
        ("Publishers", &game.publishers),
        ("Mechanics", &game.mechanics),
    ] {
        if !names.is_empty() {
            println!("  {label}: {}", names.join(", "));
        }
    }

    if let Some(expands) = &game.expands {
        let names: Vec<&str> = expands.iter().map(|l| l.name.as_str()).collect();
        println!("  Expands: {}", names.join(", "));
    }
    if let Some(expansions) = &game.expansions {
        println!("  Expansions: {}", expansions.len());
    }

    if !game.player_poll_results.is_empty() {
        println!(
            "  {}",
            "Player count votes (best / rec / not):".if_supports_color(Stdout, |t| t.bold())
        );
        for result in &game.player_poll_results {
            let plus = if result.num_players_is_and_higher { "+" } else { "" };
            println!(
                "    {:>2}{:<1}  {:>5} / {:>5} / {:>5}",
                result.num_players, plus, result.best, result.recommended, result.not_recommended
            );
        }
    }

    if !game.description.is_empty() {
        println!();
        println!("{}", game.description);
    }
}

pub(crate) fn run_search(query: &str, format: OutputFormat) -> Result<(), CliError> {
    let session = Session::open()?;
    let results = session.run(
        &format!("Searching for '{query}'..."),
        session.client.search(query),
    );

    if format == OutputFormat::Json {
        return print_json(&results);
    }
    if results.is_empty() {
        print_empty("matching games");
        return Ok(());
    }

    for result in &results {
        println!(
            "  {:>7}  {} {}",
            result.game_id,
            result.name.if_supports_color(Stdout, |t| t.cyan()),
            format!("({})", known(result.year_published))
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

pub(crate) fn run_user(username: &str, format: OutputFormat) -> Result<(), CliError> {
    let session = Session::open()?;
    let user = session.run(
        &format!("Loading user {username}..."),
        session.client.load_user_details(username),
    );

    if format == OutputFormat::Json {
        return print_json(&user);
    }
    if user.username.is_empty() {
        print_empty(&format!("user named {username}"));
        return Ok(());
    }

    println!("{}", user.username.if_supports_color(Stdout, |t| t.bold()));
    if !user.avatar.is_empty() {
        println!("  Avatar: {}", user.avatar);
    }
    Ok(())
}

pub(crate) fn run_comments(game_id: i32, total: u32, format: OutputFormat) -> Result<(), CliError> {
    let session = Session::open()?;
    let comments = session.run(
        &format!("Loading {total} comments for game {game_id}..."),
        session.client.load_all_comments(game_id, total),
    );

    if format == OutputFormat::Json {
        return print_json(&comments);
    }
    if comments.is_empty() {
        print_empty("comments");
        return Ok(());
    }

    for comment in &comments {
        println!(
            "{} {}",
            comment.username.if_supports_color(Stdout, |t| t.cyan()),
            format!("[{}]", rating(comment.rating)).if_supports_color(Stdout, |t| t.dimmed()),
        );
        if !comment.text.is_empty() {
            println!("  {}", comment.text);
        }
    }
    Ok(())
}
