use boggle_solver::{
    BoardSolver, Dictionary, Grid, GridError, MoveSet, Neighborhood, PathSearcher, Position,
    SearchError, WordMatch,
};

fn get_test_dictionary() -> Dictionary {
    Dictionary::from_words(["ca", "cat", "cats"]).unwrap()
}

fn get_test_grid() -> Grid {
    Grid::from_rows(&["ca", "ts"]).unwrap()
}

fn path(coords: &[[i32; 2]]) -> Vec<Position> {
    coords.iter().copied().map(Position::from).collect()
}

#[test]
fn test_cat_scenario() {
    let dictionary = get_test_dictionary();
    let grid = get_test_grid();
    let moves = MoveSet::king_moves();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    let results = searcher.collect_from(&Position::from([0, 0])).unwrap();

    assert_eq!(
        results,
        vec![
            WordMatch::new("ca", path(&[[0, 0], [0, 1]])),
            WordMatch::new("cat", path(&[[0, 0], [0, 1], [1, 0]])),
            WordMatch::new("cats", path(&[[0, 0], [0, 1], [1, 0], [1, 1]])),
        ]
    );
    assert!(results
        .iter()
        .all(|m| m.path.get(1) != Some(&Position::from([1, 0]))));
}

#[test]
fn test_results_append_to_existing_buffer() {
    let dictionary = get_test_dictionary();
    let grid = get_test_grid();
    let moves = MoveSet::king_moves();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    let mut results = vec![WordMatch::new("seed", vec![])];
    let stats = searcher
        .search_from(&Position::from([0, 0]), &mut results)
        .unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].word, "seed");
    assert_eq!(stats.matches, 3);
}

#[test]
fn test_pruned_start_does_no_work() {
    let dictionary = get_test_dictionary();
    let grid = get_test_grid();
    let moves = MoveSet::king_moves();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    for start in [[0, 1], [1, 0], [1, 1]] {
        let mut results = Vec::new();
        let stats = searcher
            .search_from(&Position::from(start), &mut results)
            .unwrap();
        assert!(results.is_empty());
        assert_eq!(stats.cells_entered, 0);
    }
}

#[test]
fn test_invalid_start_position() {
    let dictionary = get_test_dictionary();
    let grid = get_test_grid();
    let moves = MoveSet::king_moves();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    let mut results = Vec::new();
    let err = searcher
        .search_from(&Position::from([2, 0]), &mut results)
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::InvalidStartPosition {
            position: Position::from([2, 0]),
            shape: vec![2, 2],
        }
    );
    assert!(results.is_empty());

    assert!(searcher.collect_from(&Position::from([0, -1])).is_err());
    assert!(searcher.collect_from(&Position::from([0])).is_err());
}

#[test]
fn test_mismatched_move_set_rejected() {
    let dictionary = get_test_dictionary();
    let grid = get_test_grid();
    let moves = MoveSet::new(3, Neighborhood::Moore, false).unwrap();
    let err = PathSearcher::new(&grid, &dictionary, &moves).unwrap_err();
    assert_eq!(
        err,
        GridError::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn test_no_cell_reused() {
    // Only two 'a' cells, so "aaa" would need one of them twice.
    let dictionary = Dictionary::from_words(["aa", "aaa"]).unwrap();
    let grid = Grid::from_rows(&["ab", "ba"]).unwrap();
    let moves = MoveSet::king_moves();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    let results = searcher.collect_from(&Position::from([0, 0])).unwrap();
    assert_eq!(results, vec![WordMatch::new("aa", path(&[[0, 0], [1, 1]]))]);
}

#[test]
fn test_zero_offset_changes_nothing() {
    let dictionary = Dictionary::from_words(["aa", "a"]).unwrap();
    let grid = Grid::from_rows(&["a"]).unwrap();
    let with_zero = MoveSet::new(2, Neighborhood::Moore, true).unwrap();
    let without = MoveSet::king_moves();

    let a = PathSearcher::new(&grid, &dictionary, &with_zero)
        .unwrap()
        .collect_from(&Position::from([0, 0]))
        .unwrap();
    let b = PathSearcher::new(&grid, &dictionary, &without)
        .unwrap()
        .collect_from(&Position::from([0, 0]))
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(a, vec![WordMatch::new("a", path(&[[0, 0]]))]);
}

#[test]
fn test_word_and_extensions_both_recorded() {
    let dictionary = Dictionary::from_words(["to", "top", "tops", "stop"]).unwrap();
    let grid = Grid::from_rows(&["tops"]).unwrap();
    let moves = MoveSet::king_moves();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    let words: Vec<String> = searcher
        .collect_from(&Position::from([0, 0]))
        .unwrap()
        .into_iter()
        .map(|m| m.word)
        .collect();
    assert_eq!(words, vec!["to", "top", "tops"]);
}

#[test]
fn test_same_word_via_different_routes() {
    let dictionary = Dictionary::from_words(["ab"]).unwrap();
    let grid = Grid::from_rows(&["ab", "bx"]).unwrap();
    let moves = MoveSet::king_moves();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    let results = searcher.collect_from(&Position::from([0, 0])).unwrap();
    assert_eq!(
        results,
        vec![
            WordMatch::new("ab", path(&[[0, 0], [0, 1]])),
            WordMatch::new("ab", path(&[[0, 0], [1, 0]])),
        ]
    );
}

#[test]
fn test_orthogonal_moves_skip_diagonals() {
    let dictionary = Dictionary::from_words(["cs"]).unwrap();
    let grid = get_test_grid();

    let king = MoveSet::king_moves();
    let rook = MoveSet::new(2, Neighborhood::VonNeumann, false).unwrap();

    let diagonal = PathSearcher::new(&grid, &dictionary, &king)
        .unwrap()
        .collect_from(&Position::from([0, 0]))
        .unwrap();
    let orthogonal = PathSearcher::new(&grid, &dictionary, &rook)
        .unwrap()
        .collect_from(&Position::from([0, 0]))
        .unwrap();

    assert_eq!(diagonal.len(), 1);
    assert!(orthogonal.is_empty());
}

#[test]
fn test_uppercase_grid_keeps_grid_letters() {
    let dictionary = get_test_dictionary();
    let grid = Grid::from_rows(&["CA", "TS"]).unwrap();
    let moves = MoveSet::king_moves();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    let words: Vec<String> = searcher
        .collect_from(&Position::from([0, 0]))
        .unwrap()
        .into_iter()
        .map(|m| m.word)
        .collect();
    assert_eq!(words, vec!["CA", "CAT", "CATS"]);
}

#[test]
fn test_three_dimensional_search() {
    let dictionary = Dictionary::from_words(["ah", "abc"]).unwrap();
    // (0,0,0)='a' ... (1,1,1)='h'
    let grid = Grid::new(vec![2, 2, 2], "abcdefgh".chars().collect()).unwrap();
    let moves = MoveSet::new(3, Neighborhood::Moore, false).unwrap();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    let results = searcher.collect_from(&Position::from([0, 0, 0])).unwrap();
    let words: Vec<&str> = results.iter().map(|m| m.word.as_str()).collect();
    assert_eq!(words, vec!["abc", "ah"]);
    assert_eq!(
        results[1].path,
        vec![Position::from([0, 0, 0]), Position::from([1, 1, 1])]
    );
}

#[test]
fn test_long_snake_path() {
    let word = "abcdefghijklmnopqrstuvwxy";
    let dictionary = Dictionary::from_words([word]).unwrap();
    let grid = Grid::from_rows(&["abcde", "jihgf", "klmno", "tsrqp", "uvwxy"]).unwrap();
    let moves = MoveSet::new(2, Neighborhood::VonNeumann, false).unwrap();
    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();

    let results = searcher.collect_from(&Position::from([0, 0])).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word, word);
    assert_eq!(results[0].path.len(), 25);
}

#[test]
fn test_match_display() {
    let found = WordMatch::new("cat", path(&[[0, 0], [0, 1], [1, 0]]));
    assert_eq!(found.to_string(), "cat (0, 0) -> (0, 1) -> (1, 0)");
    assert_eq!(found.start(), Some(&Position::from([0, 0])));
}

#[test]
fn test_huge_custom_offset_is_skipped() {
    let dictionary = Dictionary::from_words(["ab", "abc"]).unwrap();
    let grid = Grid::from_rows(&["ab"]).unwrap();
    let moves =
        MoveSet::from_offsets(vec![Position::from([0, i32::MAX]), Position::from([0, 1])]).unwrap();

    let searcher = PathSearcher::new(&grid, &dictionary, &moves).unwrap();
    assert_eq!(
        searcher.collect_from(&Position::from([0, 0])).unwrap(),
        vec![WordMatch::new("ab", path(&[[0, 0], [0, 1]]))]
    );

    let solver = BoardSolver::with_moves(&grid, &dictionary, moves).unwrap();
    assert_eq!(
        solver.solve(),
        vec![WordMatch::new("ab", path(&[[0, 0], [0, 1]]))]
    );
}
