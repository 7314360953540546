// All prompt constants for the Content-Assist module. Templates carry
// `{placeholder}` markers replaced at call time.

/// Full-document generation. Replace `{description}`.
/// The response is constrained to JSON by the request's responseSchema.
pub const GENERATE_CV_PROMPT_TEMPLATE: &str = "You are a professional CV writer specializing in South African CVs. \
Based on the following description, generate a complete CV data structure.

User description: {description}

Make the content professional, achievement-focused, and tailored for the \
South African job market. Use realistic South African details (cities like \
Johannesburg, Cape Town, Durban, Pretoria). Include local context where \
relevant. Generate 2-3 work experiences, 1-2 education entries, 5-8 skills, \
and 2-3 languages.";

/// Work-experience description enhancement.
/// Replace `{job_title}`, `{company}`, `{description}`.
pub const ENHANCE_DESCRIPTION_PROMPT_TEMPLATE: &str = "You are a professional CV writer. Enhance the following job description \
to make it more impactful and professional for a South African CV.

Job Title: {job_title}
Company: {company}
Current Description: {description}

Write an enhanced job description that is:
- 1-2 sentences long
- Action-oriented and achievement-focused
- Uses strong action verbs
- Professional and concise
- Suitable for the South African job market

Enhanced Description:";

/// Professional summary generation.
/// Replace `{experience_lines}`, `{education_lines}`, `{skill_names}`.
pub const GENERATE_SUMMARY_PROMPT_TEMPLATE: &str = "You are a professional CV writer for the South African job market. Based \
on the following information, write a compelling professional summary (2-3 \
sentences) that highlights the candidate's key strengths and career \
objectives.

Work Experience:
{experience_lines}

Education:
{education_lines}

Skills:
{skill_names}

Write a professional summary that is:
- 2-3 sentences long
- Highlights key strengths and experience
- Mentions career level (junior, mid-level, senior, etc.)
- Tailored for South African employers
- Professional and confident tone

Professional Summary:";

/// Achievement bullet suggestions.
/// Replace `{job_title}`, `{company}`, `{description}`.
pub const SUGGEST_ACHIEVEMENTS_PROMPT_TEMPLATE: &str = "You are a professional CV writer. Generate 3-4 achievement bullet points \
for the following role that would be impressive on a South African CV.

Job Title: {job_title}
Company: {company}
Description: {description}

Generate achievement bullet points that:
- Start with strong action verbs
- Include quantifiable metrics where possible (percentages, numbers, etc.)
- Demonstrate impact and results
- Are specific and credible
- Follow this format: \"Action verb + what you did + impact/result\"

Example formats:
- \"Increased sales by 25% through implementation of new CRM system\"
- \"Led a team of 5 developers to deliver 10+ projects on time\"
- \"Reduced operational costs by R500,000 annually through process optimization\"

Generate 3-4 achievement bullet points (just the bullets, no numbering):";

/// Skill suggestions. Replace `{job_title}`, `{industry}`.
pub const SUGGEST_SKILLS_PROMPT_TEMPLATE: &str = "You are a career advisor for the South African job market. Suggest 8-10 \
relevant professional skills for someone with the following profile:

Job Title/Role: {job_title}
Industry: {industry}

Suggest skills that are:
- Relevant to the role and industry
- Mix of technical and soft skills
- In-demand in the South African job market
- Specific and professional (avoid generic terms like \"hard-working\")

Provide just the skill names, one per line, no descriptions or numbers:";
