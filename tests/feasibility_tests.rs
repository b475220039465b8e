//! End-to-end feasibility checks against the HiGHS backend.

use std::sync::Arc;
use std::time::Duration;

use pennant::adapter::solver::HighsSolver;
use pennant::application::verify::verify_completion;
use pennant::application::{FeasibilityService, ModelOptions, Outcome};
use pennant::domain::error::DomainError;
use pennant::domain::{
    DesiredRanking, League, Ledger, RankingClosure, Record, Standings, TeamId, TieBreak,
};
use pennant::error::Error;
use pennant::port::SolveBudget;
use pennant::testkit::fixtures::{
    finished_ledger, league, ledger_with, lopsided_ledger, small_league,
};

fn budget() -> SolveBudget {
    SolveBudget {
        time_limit: Duration::from_secs(60),
        ..SolveBudget::default()
    }
}

fn service(league: League, options: ModelOptions) -> FeasibilityService {
    FeasibilityService::new(Arc::new(HighsSolver::new()), league, options, budget())
}

fn ranking(indices: &[usize], league: &League) -> DesiredRanking {
    DesiredRanking::from_indices(indices, league).expect("valid ranking")
}

fn tie_break(policy: TieBreak) -> ModelOptions {
    ModelOptions {
        tie_break: policy,
        ..ModelOptions::default()
    }
}

fn expect_feasible(outcome: Outcome) -> Ledger {
    match outcome {
        Outcome::Feasible(ledger) => ledger,
        other => panic!("expected feasible, got {other}"),
    }
}

/// A finished season in which team 0 goes 5-1-4 and team 1 goes 6-4-0:
/// team 0 leads on percentage, team 1 on wins.
fn split_leaders() -> (League, Ledger) {
    let league = league(3, 4, 2, 4);
    let ledger = ledger_with(
        3,
        &[
            (0, 1, Record::new(3, 1, 0)),
            (0, 2, Record::new(0, 0, 4)),
            (0, 3, Record::new(2, 0, 0)),
            (1, 2, Record::new(4, 0, 0)),
            (1, 3, Record::new(1, 1, 0)),
            (2, 3, Record::new(1, 1, 0)),
        ],
    );
    (league, ledger)
}

/// A finished season whose disjunctive standings form a chain that does
/// not close: team 0 (7-2-5) beats team 1 (8-6-0) on percentage, team 1
/// beats team 2 (7-1-6) on wins, and team 0 neither leads team 2 on
/// percentage (.778 vs .875) nor on wins (7 each).
fn open_chain() -> (League, Ledger) {
    let league = league(3, 2, 10, 6);
    let ledger = ledger_with(
        3,
        &[
            (0, 1, Record::new(1, 1, 0)),
            (0, 2, Record::new(0, 0, 2)),
            (1, 2, Record::new(1, 1, 0)),
            (0, 3, Record::new(6, 1, 3)),
            (1, 3, Record::new(6, 4, 0)),
            (2, 3, Record::new(6, 0, 4)),
        ],
    );
    (league, ledger)
}

fn closure(closure: RankingClosure) -> ModelOptions {
    ModelOptions {
        closure,
        ..ModelOptions::default()
    }
}

#[test]
fn standard_league_reaches_requested_order_from_empty_season() {
    let league = League::default();
    let options = ModelOptions::default();
    let ranking = ranking(&[0, 2, 1], &league);
    let original = Ledger::empty(league.teams());

    let completion = expect_feasible(
        service(league, options)
            .check(&original, &ranking)
            .expect("solve"),
    );

    assert_eq!(
        verify_completion(&league, &original, &completion, &ranking, &options),
        Vec::<String>::new()
    );
    for team in 0..league.teams() {
        let season = completion.season_record(team);
        assert_eq!(season.total(), league.season_length());
        assert!(season.draw <= league.max_draws());
        for opponent in 0..league.teams() {
            assert_eq!(
                completion.get(team, opponent),
                completion.get(opponent, team).mirrored()
            );
        }
    }

    let standings = Standings::from_ledger(&completion);
    let margin = options.tuning.min_margin;
    let outranks =
        |a: usize, b: usize| standings.outranks(TeamId::new(a), TeamId::new(b), options.tie_break, margin);
    assert!(outranks(0, 2));
    assert!(outranks(2, 1));
    for ranked in [0, 2, 1] {
        for unranked in [3, 4, 5] {
            assert!(outranks(ranked, unranked), "{ranked} should outrank {unranked}");
        }
    }
}

#[test]
fn empty_ranking_is_always_reachable() {
    let league = small_league();
    let outcome = service(league, ModelOptions::default())
        .check(&lopsided_ledger(&league), &ranking(&[], &league))
        .expect("solve");
    assert!(outcome.is_feasible());
}

#[test]
fn completion_never_rewrites_played_games() {
    let league = small_league();
    let original = ledger_with(
        3,
        &[
            (0, 1, Record::new(1, 2, 1)),
            (2, 0, Record::new(2, 0, 0)),
            (1, 3, Record::new(1, 0, 0)),
        ],
    );
    let completion = expect_feasible(
        service(league, ModelOptions::default())
            .check(&original, &ranking(&[1, 2], &league))
            .expect("solve"),
    );

    for team in 0..league.teams() {
        for opponent in 0..league.opponent_slots() {
            assert!(completion
                .get(team, opponent)
                .extends(&original.get(team, opponent)));
        }
    }
}

#[test]
fn resolving_from_a_completion_returns_it_unchanged() {
    let league = small_league();
    let service = service(league, ModelOptions::default());
    let ranking = ranking(&[2, 0], &league);

    let first = expect_feasible(
        service
            .check(&Ledger::empty(league.teams()), &ranking)
            .expect("solve"),
    );
    let second = expect_feasible(service.check(&first, &ranking).expect("re-solve"));
    assert_eq!(second, first);
}

#[test]
fn winless_team_cannot_pass_unbeaten_team() {
    let league = small_league();
    let ledger = lopsided_ledger(&league);
    let service = service(league, ModelOptions::default());

    assert_eq!(
        service.check(&ledger, &ranking(&[0, 1], &league)).expect("solve"),
        Outcome::Infeasible
    );
    assert!(service
        .check(&ledger, &ranking(&[1, 0], &league))
        .expect("solve")
        .is_feasible());
}

#[test]
fn winless_team_cannot_lead_the_league() {
    let league = small_league();
    let outcome = service(league, ModelOptions::default())
        .check(&lopsided_ledger(&league), &ranking(&[0], &league))
        .expect("solve");
    assert_eq!(outcome, Outcome::Infeasible);
}

#[test]
fn finished_season_only_admits_its_own_order() {
    let league = small_league();
    let ledger = finished_ledger(&league);
    let service = service(league, ModelOptions::default());

    let completion = expect_feasible(
        service
            .check(&ledger, &ranking(&[0, 1, 2], &league))
            .expect("solve"),
    );
    assert_eq!(completion, ledger);
    assert_eq!(
        service.check(&ledger, &ranking(&[2, 0], &league)).expect("solve"),
        Outcome::Infeasible
    );
}

#[test]
fn disjunctive_policy_lets_either_leader_rank_first() {
    let (league, ledger) = split_leaders();
    let service = service(league, tie_break(TieBreak::Disjunctive));

    for order in [[0, 1], [1, 0]] {
        assert!(
            service
                .check(&ledger, &ranking(&order, &league))
                .expect("solve")
                .is_feasible(),
            "{order:?} should be reachable"
        );
    }
}

#[test]
fn win_rate_first_policy_prefers_percentage_leader() {
    let (league, ledger) = split_leaders();
    let service = service(league, tie_break(TieBreak::WinRateFirst));

    assert!(service
        .check(&ledger, &ranking(&[0, 1], &league))
        .expect("solve")
        .is_feasible());
    assert_eq!(
        service.check(&ledger, &ranking(&[1, 0], &league)).expect("solve"),
        Outcome::Infeasible
    );
}

#[test]
fn win_count_first_policy_prefers_wins_leader() {
    let (league, ledger) = split_leaders();
    let service = service(league, tie_break(TieBreak::WinCountFirst));

    assert!(service
        .check(&ledger, &ranking(&[1, 0], &league))
        .expect("solve")
        .is_feasible());
    assert_eq!(
        service.check(&ledger, &ranking(&[0, 1], &league)).expect("solve"),
        Outcome::Infeasible
    );
}

#[test]
fn ledger_for_another_league_is_rejected() {
    let league = small_league();
    let result = service(league, ModelOptions::default())
        .check(&Ledger::empty(4), &ranking(&[0], &league));

    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::TeamCountMismatch {
            ledger: 4,
            league: 3
        }))
    ));
}

#[test]
fn over_scheduled_pair_is_rejected() {
    let league = small_league();
    let ledger = ledger_with(3, &[(1, 3, Record::new(2, 1, 0))]);
    let result = service(league, ModelOptions::default())
        .check(&ledger, &ranking(&[1], &league));

    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::OverScheduled { played: 3, scheduled: 2, .. }))
    ));
}

#[test]
fn adjacent_closure_accepts_chain_that_pairwise_rejects() {
    let (league, ledger) = open_chain();
    assert_eq!(ledger.season_record(0), Record::new(7, 2, 5));
    assert_eq!(ledger.season_record(1), Record::new(8, 6, 0));
    assert_eq!(ledger.season_record(2), Record::new(7, 1, 6));
    let order = ranking(&[0, 1, 2], &league);

    let completion = expect_feasible(
        service(league, closure(RankingClosure::Adjacent))
            .check(&ledger, &order)
            .expect("solve"),
    );
    assert_eq!(completion, ledger);

    assert_eq!(
        service(league, closure(RankingClosure::Pairwise))
            .check(&ledger, &order)
            .expect("solve"),
        Outcome::Infeasible
    );
}

#[test]
fn pairwise_closure_accepts_transitive_order() {
    let (league, ledger) = open_chain();
    // 2 leads 0 on percentage and 1 on percentage; 0 leads 1 on percentage.
    let outcome = service(league, closure(RankingClosure::Pairwise))
        .check(&ledger, &ranking(&[2, 0, 1], &league))
        .expect("solve");
    assert!(outcome.is_feasible());
}
