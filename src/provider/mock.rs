// Built-in sample data, served when no dataset is configured.
use super::{DataProvider, in_range};
use crate::calendar::DateRange;
use crate::error::Result;
use crate::model::{
    Activity, ActivityKind, Event, EventCategory, MemberStatus, Priority, Project, ProjectStatus,
    TeamMember,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default)]
pub struct MockProvider;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn events() -> Vec<Event> {
    vec![
        Event::new(1, "프로젝트 킥오프 미팅", ymd(2024, 1, 15), EventCategory::Meeting)
            .with_description("새 프로젝트 시작을 위한 킥오프 미팅"),
        Event::new(2, "디자인 리뷰", ymd(2024, 1, 18), EventCategory::Review)
            .with_description("UI/UX 디자인 리뷰 세션"),
        Event::new(3, "코드 리뷰", ymd(2024, 1, 20), EventCategory::Review)
            .with_description("주요 기능 코드 리뷰"),
        Event::new(4, "클라이언트 미팅", ymd(2024, 1, 25), EventCategory::Meeting)
            .with_description("클라이언트와의 정기 미팅"),
        Event::new(5, "프로젝트 마감", ymd(2024, 1, 30), EventCategory::Deadline)
            .with_description("1월 프로젝트 마감일"),
    ]
}

pub fn projects() -> Vec<Project> {
    use Priority::*;
    use ProjectStatus::*;
    vec![
        Project::new(1, "웹사이트 리뉴얼", "회사 홈페이지 전면 리뉴얼 프로젝트", Active, 65, ymd(2024, 1, 15), 5, High),
        Project::new(2, "모바일 앱 개발", "크로스 플랫폼 모바일 애플리케이션", Active, 40, ymd(2024, 2, 28), 8, Medium),
        Project::new(3, "데이터베이스 최적화", "시스템 성능 개선 및 DB 최적화", Waiting, 20, ymd(2024, 1, 30), 3, High),
        Project::new(4, "마케팅 캠페인", "신제품 런칭 마케팅 전략 수립", Done, 100, ymd(2023, 12, 20), 4, Medium),
        Project::new(5, "API 문서화", "개발자를 위한 API 가이드 작성", Active, 80, ymd(2024, 1, 10), 2, Low),
        Project::new(6, "보안 강화", "시스템 보안 점검 및 강화 작업", Planned, 5, ymd(2024, 3, 15), 6, High),
    ]
}

fn member(
    id: u32,
    name: &str,
    email: &str,
    role: &str,
    department: &str,
    join_date: NaiveDate,
) -> TeamMember {
    TeamMember {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status: MemberStatus::Active,
        department: department.to_string(),
        join_date,
        avatar_url: None,
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        member(1, "김개발", "kim.dev@company.com", "개발자", "개발팀", ymd(2023, 1, 15)),
        member(2, "이디자인", "lee.design@company.com", "디자이너", "디자인팀", ymd(2023, 2, 20)),
        member(3, "박기획", "park.plan@company.com", "기획자", "기획팀", ymd(2023, 3, 10)),
        member(4, "최테스트", "choi.test@company.com", "테스터", "QA팀", ymd(2023, 4, 5)),
        member(5, "정관리", "jung.manage@company.com", "프로젝트 매니저", "관리팀", ymd(2023, 1, 1)),
    ]
}

pub fn activity() -> Vec<Activity> {
    vec![
        Activity::new("김개발", "로그인 기능", ActivityKind::Completed, 2),
        Activity::new("이디자인", "메인 페이지 디자인", ActivityKind::Updated, 4),
        Activity::new("박기획", "새 기획안", ActivityKind::Shared, 6),
        Activity::new("최테스트", "버그 리포트", ActivityKind::Reported, 24),
    ]
}

impl DataProvider for MockProvider {
    fn list_events_in_range(&self, range: &DateRange) -> Result<Vec<Event>> {
        Ok(in_range(&events(), range))
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(projects())
    }

    fn list_team_members(&self) -> Result<Vec<TeamMember>> {
        Ok(team_members())
    }

    fn list_activity(&self) -> Result<Vec<Activity>> {
        Ok(activity())
    }
}
