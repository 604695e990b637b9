//! Console referee: type the trump card, then each card as it hits the table.
//!
//! Cards are entered as ids (`27`) or text (`K♥`, `kh`). `quit` ends the
//! match early; end of input stops the program.

use std::io::{self, BufRead, Write};

use referee::domain::cards_parsing::parse_card_token;
use referee::domain::events::{MatchResult, RefereeEvent};
use referee::domain::rules::DealAward;
use referee::domain::state::{player_no, DealPhase};
use referee::telemetry::init_tracing;
use referee::{AppError, Referee, RefereeConfig};
use tracing::info;

fn main() -> Result<(), AppError> {
    init_tracing();
    let config = RefereeConfig::from_env()?;
    info!(
        deals = config.rules.deals,
        tie_policy = ?config.rules.tie_policy,
        first_dealer = player_no(config.first_dealer),
        "Referee starting"
    );
    let referee = Referee::new(&config)?;

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut lines = stdin.lock().lines();

    loop {
        let snap = referee.snapshot();
        if snap.terminal {
            break;
        }
        if snap.deal.is_none() {
            report(&mut out, &referee.start_deal()?)?;
            continue;
        }

        let prompt = match snap.deal.as_ref().map(|d| (d.phase, d.to_act)) {
            Some((DealPhase::AwaitingTrump, _)) => "Enter the trump card: ".to_string(),
            Some((_, Some(seat))) => format!("Enter card for player {}: ", player_no(seat)),
            _ => "Enter card: ".to_string(),
        };
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            report(&mut out, &referee.conclude()?)?;
            break;
        }

        let card = match parse_card_token(line) {
            Ok(card) => card,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        let result = match snap.deal.as_ref().and_then(|d| d.to_act) {
            None => referee.set_trump(card),
            Some(seat) => referee.play_card(seat, card),
        };
        match result {
            Ok(events) => report(&mut out, &events)?,
            Err(e) => writeln!(out, "Card {card} rejected: {e}")?,
        }
    }

    Ok(())
}

fn report(out: &mut impl Write, events: &[RefereeEvent]) -> io::Result<()> {
    for event in events {
        match event {
            RefereeEvent::DealStarted { deal_no, dealer } => {
                writeln!(out, "Deal {deal_no}, player {} deals", player_no(*dealer))?
            }
            RefereeEvent::TrumpSet { card, suit } => {
                writeln!(out, "Trump card set to {card} ({suit})\n")?
            }
            RefereeEvent::CardPlayed { seat, card } => {
                writeln!(out, "Player {} played {card}", player_no(*seat))?
            }
            RefereeEvent::TrickResolved(trick) => writeln!(
                out,
                "Trick {} to player {} for {} points\n",
                trick.trick_no + 1,
                player_no(trick.winner),
                trick.points
            )?,
            RefereeEvent::DealCompleted {
                deal_no,
                points,
                award,
            } => {
                writeln!(
                    out,
                    "Deal {deal_no} over: team 1 {} - team 2 {}",
                    points[0], points[1]
                )?;
                match award {
                    DealAward::Credited { team, credits } => {
                        writeln!(out, "{team} takes {credits} victory credit(s)")?
                    }
                    DealAward::Ambiguous => writeln!(out, "60/60, nobody scores")?,
                }
            }
            RefereeEvent::DealRevoked {
                deal_no,
                offender,
                suit,
                credited,
                credits,
            } => writeln!(
                out,
                "Revoke! Player {} failed to follow {suit}. Deal {deal_no} ends, {credited} takes {credits} victory credits",
                player_no(*offender)
            )?,
            RefereeEvent::MatchTerminal {
                result,
                victory_credits,
                ..
            } => {
                let verdict = match result {
                    MatchResult::Winner { team } => format!("{team} wins"),
                    MatchResult::Ambiguous => "tied".to_string(),
                };
                writeln!(
                    out,
                    "Match over, {verdict} ({} - {})",
                    victory_credits[0], victory_credits[1]
                )?
            }
        }
    }
    Ok(())
}
