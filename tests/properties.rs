//! Randomized checks on small divisions: brute-force agreement, duality, certificate validity, monotonicity.

use division_elimination::{
    analyze_team, certificate_holds, is_trivially_eliminated, Elimination, Standings, TeamRecord,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random well-formed division: symmetric games, remaining >= games inside the division.
fn random_division(rng: &mut StdRng) -> Standings {
    let n = rng.gen_range(2..=5);
    let mut games = vec![vec![0u32; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let g = rng.gen_range(0..=2);
            games[i][j] = g;
            games[j][i] = g;
        }
    }
    let teams = (0..n)
        .map(|i| {
            let inside: u32 = games[i].iter().sum();
            TeamRecord::new(
                format!("T{i}"),
                rng.gen_range(0..=8),
                rng.gen_range(0..=8),
                inside + rng.gen_range(0..=2),
                games[i].clone(),
            )
        })
        .collect();
    Standings::new(teams).unwrap()
}

/// Try every split of every game not involving `t` (t wins all of its own games).
fn brute_force_eliminated(d: &Standings, t: usize) -> bool {
    let recs = d.records();
    let cap = recs[t].max_wins();
    let others: Vec<usize> = d.team_ids().filter(|&i| i != t).collect();
    let mut pairs = Vec::new();
    for (a, &i) in others.iter().enumerate() {
        for &j in &others[a + 1..] {
            if recs[i].against[j] > 0 {
                pairs.push((i, j, recs[i].against[j]));
            }
        }
    }

    let mut split = vec![0u32; pairs.len()];
    loop {
        let mut wins: Vec<u32> = recs.iter().map(|r| r.wins).collect();
        for (&(i, j, g), &s) in pairs.iter().zip(&split) {
            wins[i] += s;
            wins[j] += g - s;
        }
        if others.iter().all(|&i| u64::from(wins[i]) <= cap) {
            return false;
        }
        // next split, odometer style
        let mut k = 0;
        loop {
            if k == pairs.len() {
                return true;
            }
            if split[k] < pairs[k].2 {
                split[k] += 1;
                break;
            }
            split[k] = 0;
            k += 1;
        }
    }
}

#[test]
fn agrees_with_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut flow_cases = 0;
    for _ in 0..500 {
        let d = random_division(&mut rng);
        for t in d.team_ids() {
            let outcome = analyze_team(&d, t).unwrap();
            assert_eq!(
                outcome.is_eliminated(),
                brute_force_eliminated(&d, t),
                "team {} of {:?}",
                t,
                d.records()
            );
            if matches!(outcome, Elimination::Flow { .. }) {
                flow_cases += 1;
            }
        }
    }
    assert!(flow_cases > 0);
}

#[test]
fn duality_and_certificate_validity() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let d = random_division(&mut rng);
        for t in d.team_ids() {
            let outcome = analyze_team(&d, t).unwrap();
            match outcome.certificate() {
                Some(cert) => {
                    assert!(outcome.is_eliminated());
                    assert!(!cert.is_empty());
                    assert!(!cert.contains(&t));
                    assert!(certificate_holds(&d, t, &cert).unwrap(), "{:?}", d.records());
                }
                None => assert!(!outcome.is_eliminated()),
            }
        }
    }
}

#[test]
fn trivial_elimination_is_subsumed() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..300 {
        let d = random_division(&mut rng);
        for t in d.team_ids() {
            if is_trivially_eliminated(&d, t).unwrap() {
                let outcome = analyze_team(&d, t).unwrap();
                assert_eq!(outcome, Elimination::Trivial { by: d.leader().unwrap() });
                assert!(certificate_holds(&d, t, &[d.leader().unwrap()]).unwrap());
            }
        }
    }
}

#[test]
fn fewer_remaining_games_never_revives_a_team() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..300 {
        let d = random_division(&mut rng);
        for t in d.team_ids() {
            if !analyze_team(&d, t).unwrap().is_eliminated() {
                continue;
            }
            let mut teams = d.records().to_vec();
            let inside: u32 = teams[t].against.iter().sum();
            // drop games against teams outside the division, keeping the table well-formed
            while teams[t].remaining > inside {
                teams[t].remaining -= 1;
                let reduced = Standings::new(teams.clone()).unwrap();
                assert!(analyze_team(&reduced, t).unwrap().is_eliminated());
            }
        }
    }
}
