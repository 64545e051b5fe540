// src/seed.rs

//! Startup seeding: the questionnaire bank and the optional admin account.

use crate::{
    config::Config,
    error::AppError,
    models::{
        category::Category::{self, Activist, Pragmatist, Reflector, Theorist},
        question::SeedQuestion,
        user::NewUser,
    },
    store::Store,
    utils::hash::hash_password,
};

const fn q(text: &'static str, category: Category) -> SeedQuestion {
    SeedQuestion { text, category }
}

/// Honey & Mumford Learning Styles Questionnaire, in presentation order.
pub const QUESTION_BANK: [SeedQuestion; 80] = [
    q("I have strong beliefs about what is right and wrong, good and bad.", Theorist),
    q("I often act without considering the possible consequences.", Activist),
    q("I tend to solve problems using a step-by-step approach.", Reflector),
    q("I believe that formal procedures and policies restrict people.", Pragmatist),
    q("I have a reputation for saying what I think, simply and directly.", Activist),
    q("I often find that actions based on feelings are as sound as those based on careful thought and analysis.", Pragmatist),
    q("I like the sort of work where I have time for thorough preparation and implementation.", Reflector),
    q("I regularly question people about their basic assumptions.", Theorist),
    q("What matters most is whether something works in practice.", Pragmatist),
    q("I actively seek out new experiences.", Activist),
    q("When I hear about a new idea or approach I immediately start working out how to apply it in practice.", Pragmatist),
    q("I am keen on self-discipline such as watching my diet, taking regular exercise, sticking to a fixed routine etc.", Reflector),
    q("I take pride in doing a thorough job.", Reflector),
    q("I get on best with logical, analytical people and less well with spontaneous, \"irrational\" people.", Theorist),
    q("I take care over the interpretation of data available to me and avoid jumping to conclusions.", Reflector),
    q("I like to reach a decision carefully after weighing up many alternatives.", Reflector),
    q("I'm attracted more to novel, unusual ideas than to practical ones.", Theorist),
    q("I don't like disorganised things and prefer to fit things into a coherent pattern.", Theorist),
    q("I accept and stick to laid down procedures and policies so long as I regard them as an efficient way of getting the job done.", Pragmatist),
    q("I like to relate my actions to a general principle.", Theorist),
    q("In discussions I like to get straight to the point.", Activist),
    q("I tend to have distant, rather formal relationships with people at work.", Theorist),
    q("I thrive on the challenge of tackling something new and different.", Activist),
    q("I enjoy fun-loving, spontaneous people.", Activist),
    q("I pay meticulous attention to detail before coming to a conclusion.", Reflector),
    q("I find it difficult to produce ideas on impulse.", Reflector),
    q("I believe in coming to the point immediately.", Activist),
    q("I am careful not to jump to conclusions too quickly.", Reflector),
    q("I prefer to have as many sources of information as possible -the more data to mull over the better.", Reflector),
    q("Flippant people who don't take things seriously enough usually irritate me.", Theorist),
    q("I listen to other people's point of view before putting my own forward.", Reflector),
    q("I tend to be open about how I'm feeling.", Activist),
    q("In discussions I enjoy watching the manoeuvrings of the other participants.", Reflector),
    q("I prefer to respond to events on a spontaneous, flexible basis rather than plan things out in advance.", Activist),
    q("I tend to be attracted to techniques such as network analysis, flow charts, branching programmes, contingency planning, etc.", Theorist),
    q("It worries me if I have to rush out a piece of work to meet a tight deadline.", Reflector),
    q("I tend to judge people's ideas on their practical merits.", Pragmatist),
    q("Quiet, thoughtful people tend to make me feel uneasy.", Activist),
    q("I often get irritated by people who want to rush things.", Reflector),
    q("It is more important to enjoy the present moment than to think about the past or future.", Activist),
    q("I think that decisions based on a thorough analysis of all the information are sounder than those based on intuition.", Theorist),
    q("I tend to be a perfectionist.", Reflector),
    q("In discussions I usually produce lots of spontaneous ideas.", Activist),
    q("In meetings I put forward practical realistic ideas.", Pragmatist),
    q("More often than not, rules are there to be broken.", Activist),
    q("I prefer to stand back from a situation and consider all the perspectives.", Reflector),
    q("I can often see inconsistencies and weaknesses in other people's arguments.", Theorist),
    q("On balance I talk more than I listen.", Activist),
    q("I can often see better, more practical ways to get things done.", Pragmatist),
    q("I think written reports should be short and to the point.", Activist),
    q("I believe that rational, logical thinking should win the day.", Theorist),
    q("I tend to discuss specific things with people rather than engaging in social discussion.", Pragmatist),
    q("I like people who approach things realistically rather than theoretically.", Pragmatist),
    q("In discussions I get impatient with irrelevancies and digressions.", Activist),
    q("If I have a report to write I tend to produce lots of drafts before settling on the final version.", Reflector),
    q("I am keen to try things out to see if they work in practice.", Pragmatist),
    q("I am keen to reach answers via a logical approach.", Theorist),
    q("I enjoy being the one that talks a lot.", Activist),
    q("In discussions I often find I am the realist, keeping people to the point and avoiding wild speculations.", Pragmatist),
    q("I like to ponder many alternatives before making up my mind.", Reflector),
    q("In discussions with people I often find I am the most dispassionate and objective.", Theorist),
    q("In discussions I'm more likely to adopt a \"low profile\" than to take the lead and do most of the talking.", Reflector),
    q("I like to be able to relate current actions to a longer-term bigger picture.", Theorist),
    q("When things go wrong I am happy to shrug it off and \"put it down to experience\".", Activist),
    q("I tend to reject wild, spontaneous ideas as being impractical.", Pragmatist),
    q("It's best to think carefully before taking action.", Reflector),
    q("On balance I do the listening rather than the talking.", Reflector),
    q("I tend to be tough on people who find it difficult to adopt a logical approach.", Theorist),
    q("Most times I believe the end justifies the means.", Activist),
    q("I don't mind hurting people's feelings so long as the job gets done.", Activist),
    q("I find the formality of having specific objectives and plans stifling.", Activist),
    q("I'm usually one of the people who puts life into a party.", Activist),
    q("I do whatever is expedient to get the job done.", Pragmatist),
    q("I quickly get bored with methodical, detailed work.", Activist),
    q("I am keen on exploring the basic assumptions, principles and theories underpinning things and events.", Theorist),
    q("I'm always interested to find out what people think.", Reflector),
    q("I like meetings to be run on methodical lines, sticking to laid down agenda, etc.", Theorist),
    q("I steer clear of subjective or ambiguous topics.", Theorist),
    q("I enjoy the drama and excitement of a crisis situation.", Activist),
    q("People often find me insensitive to their feelings.", Activist),
];

/// Inserts the question bank if the store has no questions yet.
pub async fn seed_questions(store: &dyn Store) -> Result<(), AppError> {
    let inserted = store.seed_questions(&QUESTION_BANK).await?;
    if inserted > 0 {
        tracing::info!("Seeded {} questionnaire items.", inserted);
    }
    Ok(())
}

/// Creates the configured admin account unless that username already exists.
pub async fn seed_admin_user(store: &dyn Store, config: &Config) -> Result<(), AppError> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        return Ok(());
    };

    if store.find_user_by_username(username).await?.is_some() {
        return Ok(());
    }

    tracing::info!("Seeding admin user: {}", username);
    store
        .create_user(NewUser {
            email: config.admin_email.clone(),
            username: username.clone(),
            hashed_password: hash_password(password)?,
            is_admin: true,
        })
        .await?;
    tracing::info!("Admin user created successfully.");

    Ok(())
}
