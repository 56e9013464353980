pub const INSTRUCTOR_NAME: &str = "허태훈";

pub const DEFAULT_STUDENT_NAME: &str = "학생";

pub const DIALOGUE_MAX_TOKENS: u32 = 80;
pub const DIALOGUE_TEMPERATURE: f32 = 1.0;

pub const PERSONA_SYSTEM_PROMPT: &str = "너는 '허태훈', 전설의 독설 강사야.

특징:
- 날카롭고 직설적
- 학생 멘탈 흔드는 게 특기
- 근데 사실 학생들 성장 바람
- 반말 사용
- 짧고 강렬하게
- 이모티콘 안 씀
- \"ㅋㅋ\", \"ㅎㅎ\" 같은 건 가끔 비꼴 때만";

pub const WRONG_ANSWER_MAX_CHARS: usize = 25;
pub const CORRECT_ANSWER_MAX_CHARS: usize = 15;
pub const MENTAL_BREAK_MAX_CHARS: usize = 40;
pub const COMBO_3_MAX_CHARS: usize = 25;
pub const COMBO_BROKEN_MAX_CHARS: usize = 30;

pub fn wrong_answer_prompt(
    student_name: &str,
    question: &str,
    wrong_answer: &str,
    correct_answer: &str,
) -> String {
    format!(
        "너는 전설의 독설 강사 '{INSTRUCTOR_NAME}'이야.

학생: {student_name}
문제: {question}
학생이 고른 답: {wrong_answer}
정답: {correct_answer}

학생이 틀렸어. {INSTRUCTOR_NAME} 특유의 날카롭고 독설적인 한마디로 멘탈을 흔들어.
반말, {WRONG_ANSWER_MAX_CHARS}자 이내, 한 문장만.

예시:
- \"아 진짜? 그걸 틀려?\"
- \"복습은 개뿔, 예습도 안 했지?\"
- \"이게 안 풀리면 접어\"

한 문장만 출력:"
    )
}

pub fn correct_answer_prompt() -> String {
    format!(
        "{INSTRUCTOR_NAME} 강사가 학생이 문제를 맞췄을 때 하는 무뚝뚝한 반응을 만들어.

반말, {CORRECT_ANSWER_MAX_CHARS}자 이내, 칭찬 같지 않은 칭찬.

예시:
- \"음... 운이 좋았네\"
- \"이 정도는 해야지\"
- \"겨우 맞췄구나\"

한 문장만:"
    )
}

pub fn mental_break_prompt(student_name: &str) -> String {
    format!(
        "{INSTRUCTOR_NAME}이 학생 '{student_name}'의 멘탈을 완전히 무너뜨리는 심리전 대사.

반말, {MENTAL_BREAK_MAX_CHARS}자 이내, 철학적이면서 잔인하게.

예시:
- \"아니야, 네가 못한 게 아니라 세상이 널 버린 거야\"
- \"포기하는 것도 용기야... 근데 넌 그럴 용기도 없지?\"
- \"너도 알잖아... 넌 안 될 거란 거\"

한 문장만:"
    )
}

pub fn combo_3_prompt(combo: i64) -> String {
    format!(
        "{INSTRUCTOR_NAME}이 학생의 {combo}연속 정답에 놀라면서도 인정하는 대사.

반말, {COMBO_3_MAX_CHARS}자 이내, 놀람과 약간의 칭찬.

예시:
- \"오, 이건 좀 하는데?\"
- \"드디어 제대로 하네\"
- \"복습 좀 했구나?\"

한 문장만:"
    )
}

pub fn combo_broken_prompt(combo: i64) -> String {
    format!(
        "{INSTRUCTOR_NAME}이 {combo}콤보가 끊겼을 때 비꼬는 대사.

반말, {COMBO_BROKEN_MAX_CHARS}자 이내, 안타까운 척하면서 비꼼.

예시:
- \"ㅋㅋ 아깝긴 뭐가 아까워\"
- \"거기까지였구나\"
- \"역시 너답네\"

한 문장만:"
    )
}

pub const WRONG_ANSWER_FALLBACKS: &[&str] = &[
    "너는 복습을 했니? 했으면 이럴 리가 없지 ㅋㅋ",
    "목졸라뿐다",
    "니대가리로 이해가 가긴 하겠니",
    "야 그건 기본이잖아!",
    "이게 안 되면 앞으로 어쩌려고?",
    "아니 그걸 틀려? 진짜?",
    "다시 한 번 생각해봐... 아니다, 생각 자체를 안 하는구나",
    "이 정도도 못 풀면 뭐하러 왔어?",
    "복습은 개뿔, 예습도 안 했지?",
    "너 진짜 수업 들었어? 잤지?",
];

pub const CORRECT_ANSWER_FALLBACKS: &[&str] =
    &["음... 운이 좋았네", "겨우 맞췄구나", "이 정도는 해야지"];

pub const MENTAL_BREAK_FALLBACKS: &[&str] = &[
    "아니야, 네가 못한 게 아니라 세상이 널 버린 거야",
    "너도 알잖아... 넌 안 될 거란 거",
];

pub const COMBO_3_FALLBACKS: &[&str] =
    &["오, 이건 좀 하는데?", "드디어 제대로 하네", "복습 좀 했구나?"];

pub const COMBO_BROKEN_FALLBACKS: &[&str] =
    &["ㅋㅋ 아깝긴 뭐가 아까워", "거기까지였구나", "역시 너답네"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_lists_are_quoteless_and_non_empty() {
        let lists = [
            WRONG_ANSWER_FALLBACKS,
            CORRECT_ANSWER_FALLBACKS,
            MENTAL_BREAK_FALLBACKS,
            COMBO_3_FALLBACKS,
            COMBO_BROKEN_FALLBACKS,
        ];

        for list in lists {
            assert!(!list.is_empty());
            assert!(list
                .iter()
                .all(|line| !line.is_empty() && !line.contains('"') && !line.contains('\'')));
        }
    }

    #[test]
    fn wrong_answer_prompt_interpolates_request_fields() {
        let prompt = wrong_answer_prompt("민수", "2+2는?", "5", "4");

        assert!(prompt.contains("학생: 민수"));
        assert!(prompt.contains("문제: 2+2는?"));
        assert!(prompt.contains("학생이 고른 답: 5"));
        assert!(prompt.contains("정답: 4"));
        assert!(prompt.contains("25자 이내"));
    }

    #[test]
    fn combo_prompts_include_combo_count() {
        assert!(combo_3_prompt(3).contains("3연속 정답"));
        assert!(combo_broken_prompt(7).contains("7콤보"));
    }
}
