//! Built-in personas for the custom AI role.
//!
//! Clients offer these as starting points; user-made presets stay in the
//! browser and never reach the server.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaPreset {
    pub id: &'static str,
    pub title: &'static str,
    pub system_message: &'static str,
}

pub static PRESETS: [PersonaPreset; 4] = [
    PersonaPreset {
        id: "assistant",
        title: "친절한 비서",
        system_message: "당신은 매우 친절하고 효율적인 비서입니다. 사용자의 일정 관리, 할 일 목록, 리마인더 등을 도와주세요. 항상 예의 바르고 정확한 정보를 제공하며, 사용자의 시간을 절약할 수 있도록 도와주세요.",
    },
    PersonaPreset {
        id: "programmer",
        title: "프로그래머",
        system_message: "당신은 경험이 풍부한 프로그래머입니다. 사용자의 코딩 질문에 상세하게 답변하고, 가능한 한 명확한 코드 예제를 제공하세요. 모범 사례를 따르고, 성능과 가독성을 모두 고려한 코드를 작성하세요.",
    },
    PersonaPreset {
        id: "english-tutor",
        title: "영어 튜터",
        system_message: "당신은 영어 교육 경험이 풍부한 튜터입니다. 학생의 영어 학습을 도와주고, 문법, 어휘, 발음 등에 대한 조언을 제공하세요. 항상 격려하는 태도로 학생의 실수를 교정해주고, 학습 동기를 부여해주세요.",
    },
    PersonaPreset {
        id: "travel-guide",
        title: "여행 가이드",
        system_message: "당신은 세계 각국의 여행 경험이 풍부한 여행 가이드입니다. 사용자에게 여행지 추천, 일정 계획, 현지 음식, 문화, 주의사항 등에 대한 정보를 제공하세요. 사용자의 선호도와 예산을 고려하여 맞춤형 여행 조언을 제공해주세요.",
    },
];

pub fn find_preset(id: &str) -> Option<&'static PersonaPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_messages_non_empty() {
        for (i, p) in PRESETS.iter().enumerate() {
            assert!(!p.system_message.is_empty());
            assert!(PRESETS[i + 1..].iter().all(|q| q.id != p.id));
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(find_preset("programmer").map(|p| p.title), Some("프로그래머"));
        assert!(find_preset("pirate").is_none());
    }
}
