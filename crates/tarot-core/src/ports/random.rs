//! 난수 소스 포트.
//!
//! 무작위 객체 선택과 프레임 틴트를 테스트에서 결정적으로 만들기 위해 주입한다.

/// 주입 가능한 난수 소스
pub trait RandomSource: Send {
    /// [0, 1) 범위의 균등 난수
    fn unit(&mut self) -> f32;

    /// 탐지 결과 하나를 유지할지 여부 (약 50%)
    fn keep(&mut self) -> bool {
        self.unit() > 0.5
    }
}

/// 미리 정한 값을 순환하며 반환하는 난수 소스 (테스트/재현용)
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// 값 목록으로 생성. 빈 목록이면 항상 0.0을 반환한다.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// `keep()` 결과 목록으로 생성
    pub fn from_keeps(keeps: &[bool]) -> Self {
        Self::new(keeps.iter().map(|&k| if k { 0.75 } else { 0.25 }).collect())
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
