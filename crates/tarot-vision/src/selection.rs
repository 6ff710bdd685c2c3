//! 캡션 & 영역 선택.
//!
//! 같은 레이블이 여러 번 탐지되면 그 묶음을 우선한다 ("three of cats").
//! 중복이 없으면 무작위로 최대 두 개를 고른다 ("cat & dog", "the cat").
//! 선택된 박스들은 캔버스 좌표에서 하나로 합쳐진다.

use tarot_core::error::CoreError;
use tarot_core::models::bbox::{BBox, CanvasSpace};
use tarot_core::models::detection::DetectedObject;
use tarot_core::ports::random::RandomSource;

/// 1 ~ 15 영어 수사
const CARDINAL_WORDS: [&str; 15] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen",
];

/// 중복이 없을 때 고르는 최대 객체 수
const MAX_RANDOM_PICK: usize = 2;

/// 선택 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// 카드 캡션
    pub caption: String,
    /// 선택된 객체들을 모두 포함하는 캔버스 좌표 박스
    pub bbox: BBox<CanvasSpace>,
    /// 선택된 탐지 결과의 인덱스 (입력 순서)
    pub chosen: Vec<usize>,
}

/// 개수에 해당하는 영어 수사 (1 → "one" … 15 → "fifteen")
pub fn cardinal_word(count: usize) -> Option<&'static str> {
    count
        .checked_sub(1)
        .and_then(|i| CARDINAL_WORDS.get(i))
        .copied()
}

/// 탐지 결과에서 캡션과 영역을 고른다.
///
/// 빈 입력은 전제 조건 위반 — 호출자가 먼저 걸러야 한다.
pub fn select_objects(
    detections: &[DetectedObject],
    canvas_size: u32,
    rng: &mut dyn RandomSource,
) -> Result<Selection, CoreError> {
    if detections.is_empty() {
        return Err(CoreError::validation(
            "detections",
            "탐지 결과가 비어 있습니다",
        ));
    }

    let (caption, chosen) = match most_frequent_duplicate(detections) {
        Some((label, count)) => {
            let chosen = detections
                .iter()
                .enumerate()
                .filter(|(_, d)| d.class_label == label)
                .map(|(i, _)| i)
                .collect();
            (group_caption(label, count), chosen)
        }
        None => {
            let chosen = random_pick(detections.len(), rng);
            let labels: Vec<&str> = chosen
                .iter()
                .map(|&i| detections[i].class_label.as_str())
                .collect();
            (pick_caption(&labels), chosen)
        }
    };

    let bbox = BBox::fold(
        BBox::canvas_center(canvas_size),
        chosen.iter().map(|&i| &detections[i].bbox),
    );

    Ok(Selection {
        caption,
        bbox,
        chosen,
    })
}

/// 두 번 이상 나온 레이블 중 가장 빈도가 높은 것.
/// 동률이면 탐지 순서상 먼저 나온 레이블.
fn most_frequent_duplicate(detections: &[DetectedObject]) -> Option<(&str, usize)> {
    let mut histogram: Vec<(&str, usize)> = Vec::new();
    for d in detections {
        match histogram.iter_mut().find(|(label, _)| *label == d.class_label) {
            Some((_, count)) => *count += 1,
            None => histogram.push((d.class_label.as_str(), 1)),
        }
    }

    histogram
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .fold(None, |best, (label, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((label, count)),
        })
}

/// 탐지 결과마다 독립적으로 약 50% 확률로 유지하고 앞의 두 개만 남긴다.
/// 하나도 남지 않으면 첫 번째 탐지 결과.
fn random_pick(len: usize, rng: &mut dyn RandomSource) -> Vec<usize> {
    let mut kept: Vec<usize> = (0..len).filter(|_| rng.keep()).collect();
    kept.truncate(MAX_RANDOM_PICK);
    if kept.is_empty() {
        kept.push(0);
    }
    kept
}

fn group_caption(label: &str, count: usize) -> String {
    // 15개 초과는 지원 범위 밖 — 숫자로 표기
    match cardinal_word(count) {
        Some(word) => format!("{word} of {label}s"),
        None => format!("{count} of {label}s"),
    }
}

fn pick_caption(labels: &[&str]) -> String {
    match labels {
        [single] => format!("the {single}"),
        _ => labels.join(" & "),
    }
}
