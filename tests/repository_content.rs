mod common;

use chrono::NaiveDate;
use portfolio_site::domain::entities::{
    Icon, NewExperience, NewProject, NewSkill, NewSocialLink, Platform, ProjectPatch,
    SkillCategory, SkillLevel,
};
use portfolio_site::domain::repositories::{
    ExperienceRepository, ProjectRepository, SkillRepository, SocialLinkRepository,
};
use portfolio_site::infrastructure::persistence::{
    PgExperienceRepository, PgProjectRepository, PgSkillRepository, PgSocialLinkRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[sqlx::test]
async fn test_create_and_list_projects(pool: PgPool) {
    let repo = PgProjectRepository::new(Arc::new(pool));

    let project = repo
        .create(NewProject {
            title: "Portfolio".to_string(),
            description: "This site".to_string(),
            image_url: "/uploads/a.png".to_string(),
            demo_link: Some("https://demo.example.com".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(project.title, "Portfolio");
    assert_eq!(repo.count().await.unwrap(), 1);

    let projects = repo.list().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, project.id);
}

#[sqlx::test]
async fn test_update_project_keeps_image_when_absent(pool: PgPool) {
    let id = common::create_project(&pool, "Old").await;
    let repo = PgProjectRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            id,
            ProjectPatch {
                title: "New".to_string(),
                description: "Updated".to_string(),
                demo_link: None,
                image_url: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "New");
    assert_eq!(updated.image_url, "/uploads/p.png");
    assert!(updated.demo_link.is_none());
    assert!(updated.updated_at >= updated.created_at);
}

#[sqlx::test]
async fn test_update_project_replaces_image(pool: PgPool) {
    let id = common::create_project(&pool, "Old").await;
    let repo = PgProjectRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            id,
            ProjectPatch {
                title: "Old".to_string(),
                description: "desc".to_string(),
                demo_link: None,
                image_url: Some("/uploads/new.png".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.image_url, "/uploads/new.png");
}

#[sqlx::test]
async fn test_update_missing_project(pool: PgPool) {
    let repo = PgProjectRepository::new(Arc::new(pool));

    let result = repo
        .update(
            999,
            ProjectPatch {
                title: "x".to_string(),
                description: "y".to_string(),
                demo_link: None,
                image_url: None,
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_project(pool: PgPool) {
    let id = common::create_project(&pool, "Temp").await;
    let repo = PgProjectRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_skills_round_trip_enums(pool: PgPool) {
    let repo = PgSkillRepository::new(Arc::new(pool));

    repo.create(NewSkill {
        name: "Rust".to_string(),
        category: SkillCategory::Backend,
        level: SkillLevel::Expert,
    })
    .await
    .unwrap();
    repo.create(NewSkill {
        name: "CSS".to_string(),
        category: SkillCategory::Frontend,
        level: SkillLevel::Intermediate,
    })
    .await
    .unwrap();

    let skills = repo.list().await.unwrap();

    assert_eq!(skills.len(), 2);
    let rust = skills.iter().find(|s| s.name == "Rust").unwrap();
    assert_eq!(rust.category, SkillCategory::Backend);
    assert_eq!(rust.level, SkillLevel::Expert);

    assert!(repo.delete(rust.id).await.unwrap());
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[sqlx::test]
async fn test_experiences_current_role_first(pool: PgPool) {
    let repo = PgExperienceRepository::new(Arc::new(pool));

    repo.create(NewExperience {
        title: "Junior".to_string(),
        company: "Acme".to_string(),
        start_date: date(2018, 1, 1),
        end_date: Some(date(2020, 6, 30)),
        description: "Learned a lot".to_string(),
    })
    .await
    .unwrap();
    repo.create(NewExperience {
        title: "Senior".to_string(),
        company: "Initech".to_string(),
        start_date: date(2020, 7, 1),
        end_date: None,
        description: "Ships things".to_string(),
    })
    .await
    .unwrap();

    let experiences = repo.list().await.unwrap();

    assert_eq!(experiences[0].title, "Senior");
    assert!(experiences[0].is_current());
    assert_eq!(experiences[1].end_date, Some(date(2020, 6, 30)));
}

#[sqlx::test]
async fn test_experience_end_before_start_rejected_by_database(pool: PgPool) {
    let repo = PgExperienceRepository::new(Arc::new(pool));

    let result = repo
        .create(NewExperience {
            title: "Backwards".to_string(),
            company: "Acme".to_string(),
            start_date: date(2022, 1, 1),
            end_date: Some(date(2021, 1, 1)),
            description: "x".to_string(),
        })
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_social_links_icon_optional(pool: PgPool) {
    let repo = PgSocialLinkRepository::new(Arc::new(pool));

    repo.create(NewSocialLink {
        platform: Platform::Github,
        url: "https://github.com/me".to_string(),
        icon: None,
    })
    .await
    .unwrap();
    repo.create(NewSocialLink {
        platform: Platform::Website,
        url: "https://me.example.com".to_string(),
        icon: Some(Icon::Globe),
    })
    .await
    .unwrap();

    let links = repo.list().await.unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].platform, Platform::Github);
    assert!(links[0].icon.is_none());
    assert_eq!(links[0].display_icon(), Icon::Github);
    assert_eq!(links[1].icon, Some(Icon::Globe));

    assert!(repo.delete(links[0].id).await.unwrap());
    assert!(!repo.delete(links[0].id).await.unwrap());
}
