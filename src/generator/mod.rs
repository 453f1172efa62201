// 专利趋势分析 Multi-Agent 流水线
// Researcher：调用专利检索工具收集所选研究领域的至少4条专利
// Analyst：基于Researcher的输出提炼3-5条趋势结论
// Writer：基于Analyst的输出撰写800-1000词的分析报告

pub mod agents;
pub mod crew;
pub mod outlet;
pub mod pipeline;
pub mod workflow;
