//! Integration tests: movie list file → store → producer intervals.

use std::io::Write;

use razzie_state::fakes::MemoryMovieStore;
use razzie_state::{load_into, producer_intervals, ContentDigest, DataLoadError, MovieStore};

const MOVIE_LIST: &str = "\
year;title;studios;producers;winner
1980;Can't Stop the Music;Associated Film Distribution;Allan Carr;yes
1980;Cruising;Lorimar Productions, United Artists;Jerry Weintraub;
1984;Bolero;Cannon Films;Bo Derek;yes
1990;Ghosts Can't Do It;Triumph Releasing;Bo Derek;yes
1990;The Adventures of Ford Fairlane;20th Century Fox;Steve Perry and Joel Silver;
1991;Hudson Hawk;TriStar Pictures;Joel Silver;yes
2002;Swept Away;Screen Gems;Matthew Vaughn;yes
2015;Fantastic Four;20th Century Fox;Simon Kinberg, Matthew Vaughn, Hutch Parker, Robert Kulzer and Gregory Goodman;yes
";

fn write_list(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn load_reports_totals_and_digest() {
    let file = write_list(MOVIE_LIST);
    let store = MemoryMovieStore::new();

    let report = load_into(&store, file.path()).await.unwrap();

    assert_eq!(report.total, 8);
    assert_eq!(report.winners, 6);
    assert_eq!(report.source_digest, ContentDigest::from_bytes(MOVIE_LIST.as_bytes()));
    assert_eq!(store.count().await.unwrap(), 8);
}

#[tokio::test]
async fn loaded_list_gives_expected_extremes() {
    let file = write_list(MOVIE_LIST);
    let store = MemoryMovieStore::new();
    load_into(&store, file.path()).await.unwrap();

    let result = producer_intervals(&store).await.unwrap();

    // Joel Silver's 1990 credit is not a win, so he has a single win.
    assert_eq!(result.min.len(), 1);
    assert_eq!(result.min[0].producer.as_str(), "Bo Derek");
    assert_eq!(result.min[0].interval, 6);
    assert_eq!(result.max.len(), 1);
    assert_eq!(result.max[0].producer.as_str(), "Matthew Vaughn");
    assert_eq!(result.max[0].interval, 13);
    assert_eq!(result.max[0].previous_win, 2002);
    assert_eq!(result.max[0].following_win, 2015);
}

#[tokio::test]
async fn result_serializes_with_published_field_names() {
    let file = write_list(MOVIE_LIST);
    let store = MemoryMovieStore::new();
    load_into(&store, file.path()).await.unwrap();

    let result = producer_intervals(&store).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["min"][0]["producer"], "Bo Derek");
    assert_eq!(json["min"][0]["previousWin"], 1984);
    assert_eq!(json["min"][0]["followingWin"], 1990);
    assert_eq!(json["max"][0]["interval"], 13);
}

#[tokio::test]
async fn failed_load_keeps_previous_contents() {
    let good = write_list(MOVIE_LIST);
    let bad = write_list("year;title;studios;producers;winner\nnineteen;X;Y;Z;yes\n");
    let store = MemoryMovieStore::new();
    load_into(&store, good.path()).await.unwrap();

    let err = load_into(&store, bad.path()).await.unwrap_err();

    assert!(matches!(err, DataLoadError::InvalidYear { line: 2, .. }));
    assert_eq!(store.count().await.unwrap(), 8);
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryMovieStore::new();

    let err = load_into(&store, &dir.path().join("movielist.csv"))
        .await
        .unwrap_err();

    assert!(matches!(err, DataLoadError::Io { .. }));
}

#[tokio::test]
async fn quoted_title_does_not_shift_winner_column() {
    let file = write_list(
        "year;title;studios;producers;winner\n\
         1980;\"Title; Part 2\";S;Allan Carr;yes\n\
         1985;Sequel;S;Allan Carr;yes\n",
    );
    let store = MemoryMovieStore::new();

    let report = load_into(&store, file.path()).await.unwrap();
    assert_eq!(report.winners, 2);

    let result = producer_intervals(&store).await.unwrap();
    assert_eq!(result.min[0].producer.as_str(), "Allan Carr");
    assert_eq!(result.min[0].interval, 5);
}

#[tokio::test]
async fn non_utf8_list_is_rejected_without_touching_store() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"year;title;studios;producers;winner\n1980;A;S;P\xff;yes\n1990;B;S;P\xfe;yes\n")
        .unwrap();
    file.flush().unwrap();
    let store = MemoryMovieStore::new();

    let err = load_into(&store, file.path()).await.unwrap_err();

    assert!(matches!(err, DataLoadError::InvalidEncoding { .. }));
    assert_eq!(store.count().await.unwrap(), 0);
}
