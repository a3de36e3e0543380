use cellwise::core::Grid;
use cellwise::solve::{solve_with_stats, SolveResult};
use std::process::ExitCode;

/// Solves a Sudoku given as a grid literal on the command line: 81 cell
/// characters, `1`-`9` for givens and `.` or `0` for blanks, anything else
/// ignored.  Exits 0 when solved, 1 when there is no solution, 2 on bad
/// input.
fn main() -> ExitCode {
  env_logger::init();
  let Some(arg) = std::env::args().nth(1) else {
    eprintln!("usage: solve-grid <81-char grid>");
    return ExitCode::from(2);
  };
  let grid = match arg.parse::<Grid>() {
    Ok(grid) => grid,
    Err(err) => {
      eprintln!("unreadable grid: {err}");
      return ExitCode::from(2);
    }
  };
  let (result, searcher) = solve_with_stats(&grid);
  match result {
    SolveResult::Solved(solution) => {
      println!("{solution:?}");
      if searcher.total_forks > 0 {
        eprintln!(
          "solved with {} guesses, {} deep",
          searcher.total_forks, searcher.max_depth
        );
      }
      ExitCode::SUCCESS
    }
    SolveResult::NoSolution => {
      println!("no solution");
      ExitCode::from(1)
    }
    SolveResult::Invalid(locs) => {
      println!("invalid puzzle: repeated digits at {locs:?}");
      ExitCode::from(2)
    }
  }
}
