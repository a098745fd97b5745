use approx::assert_relative_eq;

use articulation_core::alignment::domain::alignment_entry::MatchType;
use articulation_core::scoring::domain::grade::Category;
use articulation_core::{assess, AssessArticulationUseCase, AssessmentConfig};

const SPEECH_REFERENCE: &str = "
Assalamualaikum warahmatullahi wabarakatuh,
Selamat pagi dan salam sejahtera bagi kita semua.
Hadirin yang saya hormati,
Di era modern ini, teknologi telah menjadi bagian penting dari kehidupan manusia.
Hampir setiap aspek kehidupan, mulai dari pendidikan, kesehatan, hingga komunikasi,
kini bergantung pada kemajuan teknologi.
Dengan teknologi, jarak bukan lagi penghalang, waktu bukan lagi batas,
dan informasi dapat diakses dalam hitungan detik.
Namun, di balik kemudahan itu, kita harus tetap bijak.
Teknologi bukan hanya soal kecanggihan, tetapi juga tanggung jawab.
Kita harus mampu menggunakannya untuk hal-hal positif,
membangun kreativitas, dan memperluas wawasan.
Mari kita jadikan teknologi sebagai alat untuk menciptakan perubahan,
bukan sekadar hiburan.
Dengan semangat inovasi dan etika digital,
kita dapat membangun masa depan yang lebih baik dan bermanfaat bagi semua.
Terima kasih.
Wassalamualaikum warahmatullahi wabarakatuh.
";

const SPEECH_TRANSCRIPT: &str = "
assalamualaikum warahmatullahi wabarakatuh selamat pagi dan salam sejahtera bagi kita semua
hadirin yang saya hormati di era modern ini teknologi telah menjadi bagian penting dari
kehidupan manusia hampir setiap aspek kehidupan mulai dari pendidikan kesehatan hingga
komunikasi kini bergantung pada kemajuan teknologi dengan teknologi jarak bukan lagi
penghalang waktu bukan lagi batas dan informasi dapat diakses dalam hitungan detik
namun di balik kemudahan itu kita harus tetap bijak teknologi bukan hanya soal
kecanggihan tetapi juga tanggung jawab kita harus mampu menggunakannya untuk hal-hal
positif membangun kreativitas dan memperluas wawasan mari kita jadikan teknologi
sebagai alat untuk menciptakan perubahan bukan sekadar hiburan dengan semangat
inovasi dan etika digital kita dapat membangun masa depan yang lebih baik dan
bermanfaat bagi semua terima kasih wassalamualaikum warahmatullahi wabarakatuh
";

#[test]
fn test_filler_insertion_scenario() {
    let result = assess("saya eh suka makan nasi", "saya suka makan nasi", 0.7).unwrap();

    assert_eq!(result.correct_words, 4);
    assert_eq!(result.total_words, 4);
    assert_relative_eq!(result.accuracy_percentage, 100.0);
    assert_eq!(result.category, Category::Excellent);
    assert_eq!(result.points, 5);

    let eh = &result.word_scores[1];
    assert_eq!(eh.match_type, MatchType::Insertion);
    assert_eq!(eh.detected.as_deref(), Some("eh"));
    assert!(eh.is_filler);
    assert_eq!(result.error_tally.extra_words, 0);
}

#[test]
fn test_substitution_scenario() {
    let result = assess(
        "kucing duduk di bawah meja",
        "kucing duduk di atas meja",
        0.7,
    )
    .unwrap();

    assert_eq!(result.correct_words, 4);
    assert_eq!(result.total_words, 5);
    assert_relative_eq!(result.accuracy_percentage, 80.0);
    assert_eq!(result.category, Category::Good);
    assert_eq!(result.points, 4);

    let atas = &result.word_scores[3];
    assert_eq!(atas.match_type, MatchType::Substitution);
    assert_eq!(atas.expected.as_deref(), Some("atas"));
    assert_eq!(atas.detected.as_deref(), Some("bawah"));
    assert!(atas.similarity < 0.7);
    assert_eq!(result.unclear_words, vec!["atas"]);
    assert!(result
        .detailed_feedback
        .contains(&"  • 'atas' detected as 'bawah' (similarity: 44%)".to_string()));
}

#[test]
fn test_empty_reference_scenario() {
    let result = assess("halo", "", 0.7).unwrap();

    assert_eq!(result.total_words, 0);
    assert_eq!(result.correct_words, 0);
    assert_relative_eq!(result.accuracy_percentage, 0.0);
    assert_eq!(result.word_scores.len(), 1);
    assert_eq!(result.word_scores[0].match_type, MatchType::Insertion);
    assert_eq!(result.word_scores[0].expected, None);
    assert_eq!(result.category, Category::NeedsImprovement);
}

#[test]
fn test_empty_transcript_marks_every_word_unspoken() {
    let result = assess("", "saya suka makan", 0.7).unwrap();

    assert_eq!(result.total_words, 3);
    assert_eq!(result.correct_words, 0);
    assert!(result
        .word_scores
        .iter()
        .all(|ws| ws.match_type == MatchType::Deletion && ws.detected.is_none()));
    assert_eq!(result.error_tally.deletions, 3);
    assert_eq!(result.unclear_words, vec!["saya", "suka", "makan"]);
}

#[test]
fn test_both_empty_is_a_valid_zero_result() {
    let result = assess("", "", 0.7).unwrap();
    assert_eq!(result.total_words, 0);
    assert!(result.word_scores.is_empty());
    assert_relative_eq!(result.accuracy_percentage, 0.0);
}

#[test]
fn test_speech_read_verbatim_scores_perfectly() {
    let result = assess(SPEECH_TRANSCRIPT, SPEECH_REFERENCE, 0.7).unwrap();

    assert_eq!(result.total_words, 124);
    assert_eq!(result.correct_words, 124);
    assert_relative_eq!(result.accuracy_percentage, 100.0);
    assert!(result.filler_words_detected.is_empty());
    assert!(result.unclear_words.is_empty());
}

#[test]
fn test_speech_with_disfluencies_and_asr_noise() {
    let transcript = SPEECH_TRANSCRIPT
        .replace("teknologi telah", "teknologi eh telah")
        .replace("kehidupan mulai", "kehidupan ehm mulai")
        .replace("penghalang", "penghalank")
        .replace("diakses", "di akses")
        .replace("kreativitas", "kretivitas")
        .replace("inovasi dan", "dan");

    let result = assess(&transcript, SPEECH_REFERENCE, 0.7).unwrap();

    assert_eq!(result.total_words, 124);
    assert_eq!(result.correct_words, 123);
    assert_relative_eq!(result.accuracy_percentage, 12300.0 / 124.0);
    assert_eq!(result.category, Category::Excellent);
    assert_eq!(result.filler_words_detected, vec!["eh", "ehm"]);
    assert_eq!(result.unclear_words, vec!["inovasi"]);
    assert_eq!(result.word_scores.len(), 127);

    let errors: Vec<(Option<&str>, Option<&str>, MatchType)> = result
        .word_scores
        .iter()
        .filter(|ws| ws.match_type != MatchType::Match)
        .map(|ws| (ws.expected.as_deref(), ws.detected.as_deref(), ws.match_type))
        .collect();
    assert_eq!(
        errors,
        vec![
            (None, Some("eh"), MatchType::Insertion),
            (None, Some("ehm"), MatchType::Insertion),
            (None, Some("di"), MatchType::Insertion),
            (Some("inovasi"), None, MatchType::Deletion),
        ]
    );

    assert_eq!(result.error_tally.deletions, 1);
    assert_eq!(result.error_tally.substitutions, 0);
    assert_eq!(result.error_tally.extra_words, 1);
    assert_eq!(
        result.detailed_feedback[0],
        "Word accuracy: 123/124 words correct (99.2%)"
    );
    assert_eq!(result.detailed_feedback[1], "Filler words: 2 detected (eh, ehm)");
}

#[test]
fn test_simple_view_of_speech() {
    let transcript = SPEECH_TRANSCRIPT.replace("inovasi dan", "dan");
    let result = assess(&transcript, SPEECH_REFERENCE, 0.7).unwrap();
    let simple = result.simple();

    assert_relative_eq!(simple.accuracy_percentage, 99.2);
    assert_eq!(simple.category, Category::Excellent);
    assert_eq!(simple.points, 5);
    assert_eq!(simple.correct_words, 123);
    assert_eq!(simple.total_words, 124);
    assert_eq!(simple.filler_count, 0);
    assert_eq!(simple.unclear_words, vec!["inovasi"]);
}

#[test]
fn test_stricter_threshold_turns_near_misses_into_substitutions() {
    let loose = assess("saya makam nasi", "saya makan nasi", 0.7).unwrap();
    assert_eq!(loose.correct_words, 3);

    let strict = assess("saya makam nasi", "saya makan nasi", 0.9).unwrap();
    assert_eq!(strict.correct_words, 2);
    assert_eq!(strict.word_scores[1].match_type, MatchType::Substitution);
}

#[test]
fn test_use_case_rejects_oversized_input_and_accepts_at_limit() {
    let config = AssessmentConfig::default().with_max_words(4);
    let mut use_case = AssessArticulationUseCase::new(config);

    assert!(use_case
        .execute("saya suka makan nasi", "saya suka makan nasi")
        .is_ok());
    assert!(use_case
        .execute("saya suka makan nasi goreng", "saya suka makan nasi")
        .is_err());
}
